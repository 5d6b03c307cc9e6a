use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::enums::*;
use crate::models::*;

/// Persists a test request together with its owning user and any attached
/// sub-records. Existing rows are updated in place; the UNIQUE constraint on
/// `request_id` keeps each sub-record owned by exactly one request.
pub fn save_test_request(conn: &Connection, request: &TestRequest) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO users (id, user_name) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET user_name = excluded.user_name",
        params![request.created_by.id, request.created_by.user_name],
    )?;

    conn.execute(
        "INSERT INTO test_requests (request_id, name, gender, email, phone_number,
         address, pin_code, age, created, status, created_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         ON CONFLICT(request_id) DO UPDATE SET
           name = excluded.name,
           gender = excluded.gender,
           email = excluded.email,
           phone_number = excluded.phone_number,
           address = excluded.address,
           pin_code = excluded.pin_code,
           age = excluded.age,
           created = excluded.created,
           status = excluded.status,
           created_by = excluded.created_by",
        params![
            request.request_id,
            request.name,
            request.gender.as_str(),
            request.email,
            request.phone_number,
            request.address,
            request.pin_code,
            request.age,
            request.created.to_string(),
            request.status.as_str(),
            request.created_by.id,
        ],
    )?;

    if let Some(ref lab) = request.lab_result {
        conn.execute(
            "INSERT INTO lab_results (request_id, blood_pressure, heart_beat,
             oxygen_level, temperature, comments, result)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(request_id) DO UPDATE SET
               blood_pressure = excluded.blood_pressure,
               heart_beat = excluded.heart_beat,
               oxygen_level = excluded.oxygen_level,
               temperature = excluded.temperature,
               comments = excluded.comments,
               result = excluded.result",
            params![
                request.request_id,
                lab.blood_pressure,
                lab.heart_beat,
                lab.oxygen_level,
                lab.temperature,
                lab.comments,
                lab.result.as_ref().map(|r| r.as_str()),
            ],
        )?;
    }

    if let Some(ref consultation) = request.consultation {
        conn.execute(
            "INSERT INTO consultations (request_id, suggestion, comments)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(request_id) DO UPDATE SET
               suggestion = excluded.suggestion,
               comments = excluded.comments",
            params![
                request.request_id,
                consultation.suggestion.as_ref().map(|s| s.as_str()),
                consultation.comments,
            ],
        )?;
    }

    Ok(())
}

pub fn find_by_id(conn: &Connection, request_id: i64) -> Result<Option<TestRequest>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT t.request_id, t.name, t.gender, t.email, t.phone_number, t.address,
                    t.pin_code, t.age, t.created, t.status, u.id, u.user_name
             FROM test_requests t
             JOIN users u ON t.created_by = u.id
             WHERE t.request_id = ?1",
            params![request_id],
            request_row_from_rusqlite,
        )
        .optional()?;

    match row {
        Some(row) => Ok(Some(request_from_row(conn, row)?)),
        None => Ok(None),
    }
}

pub fn find_by_status(
    conn: &Connection,
    status: &RequestStatus,
) -> Result<Vec<TestRequest>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT t.request_id, t.name, t.gender, t.email, t.phone_number, t.address,
                t.pin_code, t.age, t.created, t.status, u.id, u.user_name
         FROM test_requests t
         JOIN users u ON t.created_by = u.id
         WHERE t.status = ?1
         ORDER BY t.created DESC",
    )?;

    let rows = stmt.query_map(params![status.as_str()], request_row_from_rusqlite)?;

    let mut requests = Vec::new();
    for row in rows {
        requests.push(request_from_row(conn, row?)?);
    }
    Ok(requests)
}

/// True if a non-completed request already exists for this phone number.
pub fn has_active_request_for_phone(
    conn: &Connection,
    phone_number: &str,
) -> Result<bool, DatabaseError> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM test_requests
         WHERE phone_number = ?1 AND status != ?2",
        params![phone_number, RequestStatus::Completed.as_str()],
        |row| row.get(0),
    )?;
    Ok(exists)
}

// Internal row type for TestRequest mapping
struct TestRequestRow {
    request_id: i64,
    name: String,
    gender: String,
    email: Option<String>,
    phone_number: String,
    address: String,
    pin_code: i64,
    age: i64,
    created: String,
    status: String,
    created_by_id: i64,
    created_by_name: String,
}

fn request_row_from_rusqlite(row: &rusqlite::Row<'_>) -> Result<TestRequestRow, rusqlite::Error> {
    Ok(TestRequestRow {
        request_id: row.get(0)?,
        name: row.get(1)?,
        gender: row.get(2)?,
        email: row.get(3)?,
        phone_number: row.get(4)?,
        address: row.get(5)?,
        pin_code: row.get(6)?,
        age: row.get(7)?,
        created: row.get(8)?,
        status: row.get(9)?,
        created_by_id: row.get(10)?,
        created_by_name: row.get(11)?,
    })
}

fn request_from_row(conn: &Connection, row: TestRequestRow) -> Result<TestRequest, DatabaseError> {
    let lab_result = load_lab_result(conn, row.request_id)?;
    let consultation = load_consultation(conn, row.request_id)?;

    Ok(TestRequest {
        request_id: row.request_id,
        name: row.name,
        gender: Gender::from_str(&row.gender)?,
        email: row.email,
        phone_number: row.phone_number,
        address: row.address,
        pin_code: row.pin_code as u32,
        age: row.age as u32,
        created: NaiveDate::parse_from_str(&row.created, "%Y-%m-%d").unwrap_or_default(),
        status: RequestStatus::from_str(&row.status)?,
        created_by: User {
            id: row.created_by_id,
            user_name: row.created_by_name,
        },
        lab_result,
        consultation,
    })
}

fn load_lab_result(
    conn: &Connection,
    request_id: i64,
) -> Result<Option<LabResult>, DatabaseError> {
    type LabColumns = (
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
    );

    let row: Option<LabColumns> = conn
        .query_row(
            "SELECT blood_pressure, heart_beat, oxygen_level, temperature, comments, result
             FROM lab_results WHERE request_id = ?1",
            params![request_id],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            },
        )
        .optional()?;

    match row {
        Some((blood_pressure, heart_beat, oxygen_level, temperature, comments, result)) => {
            let result = match result {
                Some(s) => Some(TestStatus::from_str(&s)?),
                None => None,
            };
            Ok(Some(LabResult {
                blood_pressure,
                heart_beat,
                oxygen_level,
                temperature,
                comments,
                result,
            }))
        }
        None => Ok(None),
    }
}

fn load_consultation(
    conn: &Connection,
    request_id: i64,
) -> Result<Option<Consultation>, DatabaseError> {
    let row: Option<(Option<String>, Option<String>)> = conn
        .query_row(
            "SELECT suggestion, comments FROM consultations WHERE request_id = ?1",
            params![request_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match row {
        Some((suggestion, comments)) => {
            let suggestion = match suggestion {
                Some(s) => Some(DoctorSuggestion::from_str(&s)?),
                None => None,
            };
            Ok(Some(Consultation {
                suggestion,
                comments,
            }))
        }
        None => Ok(None),
    }
}
