//! Member repository

use crate::errors::{from_rusqlite, Result};
use crate::repo::cascade::{self, CascadeReport, Table};
use gym_core::rules::{lookup_name, required_text, validate_age, validate_membership_type};
use gym_core::{log_op_end, log_op_error, log_op_start, Member, MembershipType};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};
use std::time::Instant;

const OP_CREATE: &str = "member_create";
const OP_DELETE: &str = "member_delete";
const OP_READ: &str = "member_read";

const COLUMNS: &str = "id, name, age, membership_type";

/// SQLite repository for members
pub struct MemberRepo;

impl MemberRepo {
    /// Create a member
    ///
    /// `membership_type` must be "Monthly" or "Annual" (surrounding
    /// whitespace ignored). The check runs before storage is touched and is
    /// repeated by the schema.
    ///
    /// # Errors
    /// * `Validation` - Blank name, unknown membership type, or negative age
    /// * `StorageConstraint` - If the row violates a schema constraint
    pub fn create(
        conn: &mut Connection,
        name: &str,
        membership_type: &str,
        age: Option<i64>,
    ) -> Result<Member> {
        log_op_start!(OP_CREATE);
        let start = Instant::now();

        let member = Self::create_impl(conn, name, membership_type, age).map_err(|e| {
            log_op_error!(
                OP_CREATE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            OP_CREATE,
            duration_ms = start.elapsed().as_millis() as u64,
            member_id = member.id,
            membership_type = member.membership_type.as_str()
        );

        Ok(member)
    }

    fn create_impl(
        conn: &mut Connection,
        name: &str,
        membership_type: &str,
        age: Option<i64>,
    ) -> Result<Member> {
        let name = required_text("name", name)?;
        let membership_type = validate_membership_type(membership_type)?;
        let age = validate_age(age)?;

        let tx = conn.transaction().map_err(|e| from_rusqlite(OP_CREATE, e))?;
        tx.execute(
            "INSERT INTO members (name, age, membership_type) VALUES (?1, ?2, ?3)",
            rusqlite::params![name, age, membership_type.as_str()],
        )
        .map_err(|e| from_rusqlite(OP_CREATE, e))?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(|e| from_rusqlite(OP_CREATE, e))?;

        Ok(Member {
            id,
            name,
            age,
            membership_type,
        })
    }

    /// All members in ascending id order
    pub fn get_all(conn: &Connection) -> Result<Vec<Member>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM members ORDER BY id"))
            .map_err(|e| from_rusqlite(OP_READ, e))?;
        let members = stmt
            .query_map([], member_from_row)
            .map_err(|e| from_rusqlite(OP_READ, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(OP_READ, e))?;
        Ok(members)
    }

    /// Look up a member by id; `None` when absent
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Member>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM members WHERE id = ?1"),
            [id],
            member_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_READ, e))
    }

    /// Case-insensitive exact match on the trimmed name; the lowest id wins
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Member>> {
        let Some(name) = lookup_name(name) else {
            return Ok(None);
        };
        conn.query_row(
            &format!(
                "SELECT {COLUMNS} FROM members WHERE fold_case(name) = fold_case(?1) ORDER BY id LIMIT 1"
            ),
            [name],
            member_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_READ, e))
    }

    /// Delete a member and every schedule it holds
    ///
    /// Returns `false` when no member has this id.
    pub fn delete(conn: &mut Connection, id: i64) -> Result<bool> {
        log_op_start!(OP_DELETE, member_id = id);
        let start = Instant::now();

        let report = Self::delete_impl(conn, id).map_err(|e| {
            log_op_error!(
                OP_DELETE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                member_id = id
            );
            e
        })?;

        log_op_end!(
            OP_DELETE,
            duration_ms = start.elapsed().as_millis() as u64,
            member_id = id,
            deleted = report.is_some(),
            schedules = report.map(|r| r.schedules).unwrap_or(0)
        );

        Ok(report.is_some())
    }

    fn delete_impl(conn: &mut Connection, id: i64) -> Result<Option<CascadeReport>> {
        let tx = conn.transaction().map_err(|e| from_rusqlite(OP_DELETE, e))?;
        if !cascade::exists(&tx, Table::Members, id)? {
            return Ok(None);
        }
        let report = cascade::remove_member(&tx, id)?;
        tx.commit().map_err(|e| from_rusqlite(OP_DELETE, e))?;
        Ok(Some(report))
    }
}

fn member_from_row(row: &Row<'_>) -> rusqlite::Result<Member> {
    let raw_type: String = row.get(3)?;
    let membership_type = raw_type
        .parse::<MembershipType>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Member {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        membership_type,
    })
}
