use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::models::Turn;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Session turns ──

pub fn get_session_turns(conn: &Connection, phone: &str) -> anyhow::Result<Vec<Turn>> {
    let mut stmt = conn.prepare(
        "SELECT user_text, agent_text FROM session_turns WHERE phone = ?1 ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![phone], |row| {
        Ok(Turn {
            user: row.get(0)?,
            agent: row.get(1)?,
        })
    })?;

    let mut turns = Vec::new();
    for row in rows {
        turns.push(row?);
    }
    Ok(turns)
}

pub fn insert_session_turn(
    conn: &Connection,
    phone: &str,
    turn: &Turn,
    at: &NaiveDateTime,
) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO session_turns (phone, user_text, agent_text, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![phone, turn.user, turn.agent, at.format(TIMESTAMP_FORMAT).to_string()],
    )?;
    Ok(())
}

/// Drops the oldest turns so at most `keep` remain for this phone.
pub fn trim_session_turns(conn: &Connection, phone: &str, keep: usize) -> anyhow::Result<usize> {
    let deleted = conn.execute(
        "DELETE FROM session_turns
         WHERE phone = ?1 AND id NOT IN (
             SELECT id FROM session_turns WHERE phone = ?1 ORDER BY id DESC LIMIT ?2
         )",
        params![phone, keep as i64],
    )?;
    Ok(deleted)
}

pub fn delete_session(conn: &Connection, phone: &str) -> anyhow::Result<bool> {
    let deleted = conn.execute("DELETE FROM session_turns WHERE phone = ?1", params![phone])?;
    Ok(deleted > 0)
}

/// Phones whose newest turn is older than `cutoff`.
pub fn inactive_session_phones(
    conn: &Connection,
    cutoff: &NaiveDateTime,
) -> anyhow::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT phone FROM session_turns GROUP BY phone HAVING MAX(created_at) < ?1",
    )?;
    let rows = stmt.query_map(params![cutoff.format(TIMESTAMP_FORMAT).to_string()], |row| {
        row.get::<_, String>(0)
    })?;

    let mut phones = Vec::new();
    for row in rows {
        phones.push(row?);
    }
    Ok(phones)
}

/// Deletes the phone's turns unless one was written at or after `cutoff`.
pub fn delete_session_if_inactive(
    conn: &Connection,
    phone: &str,
    cutoff: &NaiveDateTime,
) -> anyhow::Result<bool> {
    let deleted = conn.execute(
        "DELETE FROM session_turns
         WHERE phone = ?1
           AND (SELECT MAX(created_at) FROM session_turns WHERE phone = ?1) < ?2",
        params![phone, cutoff.format(TIMESTAMP_FORMAT).to_string()],
    )?;
    Ok(deleted > 0)
}
