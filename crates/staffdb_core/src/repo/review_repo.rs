//! Review repository over the `reviews` table.
//!
//! Same shape as the employee repository: single-statement writes and one
//! tracked `ReviewHandle` per id.

use crate::db::schema::{self, REVIEWS};
use crate::model::employee::EmployeeId;
use crate::model::review::{Review, ReviewId, ReviewRow};
use crate::repo::identity_map::{shared, IdentityMap, Shared};
use crate::repo::lookup::{EmployeeLookup, ReviewSource};
use crate::repo::{invalid_row, RepoError, RepoResult};
use log::{debug, info, warn};
use rusqlite::{params, Connection, OptionalExtension, Params, Row};
use std::rc::Rc;

const REVIEW_SELECT_SQL: &str = "SELECT id, year, summary, employee_id FROM reviews";

/// Live, identity-mapped review instance.
pub type ReviewHandle = Shared<Review>;

pub struct ReviewRepository<'conn> {
    conn: &'conn Connection,
    identity: IdentityMap<Review>,
}

impl<'conn> ReviewRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            identity: IdentityMap::default(),
        }
    }

    pub fn create_table(&self) -> RepoResult<()> {
        schema::create_table(self.conn, REVIEWS)?;
        Ok(())
    }

    pub fn drop_table(&self) -> RepoResult<()> {
        schema::drop_table(self.conn, REVIEWS)?;
        self.identity.clear();
        Ok(())
    }

    pub fn save(&self, review: &ReviewHandle) -> RepoResult<ReviewHandle> {
        if review.borrow().is_persisted() {
            return self.update(review);
        }

        let id = {
            let current = review.borrow();
            self.conn.execute(
                "INSERT INTO reviews (year, summary, employee_id) VALUES (?1, ?2, ?3);",
                params![current.year(), current.summary(), current.employee_id()],
            )?;
            self.conn.last_insert_rowid()
        };

        review.borrow_mut().set_id(Some(id));
        self.identity.insert(id, Rc::clone(review));
        info!("event=review_insert module=repo status=ok id={id}");
        Ok(Rc::clone(review))
    }

    pub fn create(
        &self,
        year: i64,
        summary: &str,
        employee_id: EmployeeId,
        employees: &impl EmployeeLookup,
    ) -> RepoResult<ReviewHandle> {
        let review = Review::new(year, summary, employee_id, employees)?;
        self.save(&shared(review))
    }

    /// Tracked instance for `row.id`, refreshed unless currently borrowed.
    pub fn instance_from_db(&self, row: ReviewRow) -> RepoResult<ReviewHandle> {
        let id = row.id;
        match self.identity.get(id) {
            Some(existing) => {
                match existing.try_borrow_mut() {
                    Ok(mut current) => {
                        current
                            .refresh_from_row(row)
                            .map_err(|err| invalid_row(REVIEWS.name, id, err))?;
                        debug!("event=identity_hit module=repo entity=review id={id}");
                    }
                    Err(_) => {
                        warn!("event=identity_hit module=repo entity=review status=busy id={id}");
                    }
                }
                Ok(existing)
            }
            None => {
                let review =
                    Review::from_row(row).map_err(|err| invalid_row(REVIEWS.name, id, err))?;
                let handle = shared(review);
                self.identity.insert(id, Rc::clone(&handle));
                Ok(handle)
            }
        }
    }

    pub fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<ReviewHandle>> {
        let row = self
            .conn
            .query_row(
                &format!("{REVIEW_SELECT_SQL} WHERE id = ?1;"),
                [id],
                read_review_row,
            )
            .optional()?;
        row.map(|row| self.instance_from_db(row)).transpose()
    }

    /// All reviews whose `employee_id` matches, in store order.
    pub fn find_by_employee_id(&self, employee_id: EmployeeId) -> RepoResult<Vec<ReviewHandle>> {
        self.load_many(
            &format!("{REVIEW_SELECT_SQL} WHERE employee_id = ?1;"),
            params![employee_id],
        )
    }

    pub fn update(&self, review: &ReviewHandle) -> RepoResult<ReviewHandle> {
        let current = review.borrow();
        let Some(id) = current.id() else {
            return Err(RepoError::NotPersisted { entity: "review" });
        };

        let changed = self.conn.execute(
            "UPDATE reviews
             SET year = ?1, summary = ?2, employee_id = ?3
             WHERE id = ?4;",
            params![current.year(), current.summary(), current.employee_id(), id],
        )?;
        if changed == 0 {
            warn!("event=review_update module=repo status=missing id={id}");
        } else {
            info!("event=review_update module=repo status=ok id={id}");
        }

        Ok(Rc::clone(review))
    }

    pub fn delete(&self, review: &ReviewHandle) -> RepoResult<()> {
        let Some(id) = review.borrow().id() else {
            return Ok(());
        };

        self.conn.execute("DELETE FROM reviews WHERE id = ?1;", [id])?;
        self.identity.remove(id);
        review.borrow_mut().set_id(None);
        info!("event=review_delete module=repo status=ok id={id}");
        Ok(())
    }

    pub fn get_all(&self) -> RepoResult<Vec<ReviewHandle>> {
        self.load_many(&format!("{REVIEW_SELECT_SQL};"), params![])
    }

    pub fn identity_map(&self) -> &IdentityMap<Review> {
        &self.identity
    }

    fn load_many(&self, sql: &str, bind: impl Params) -> RepoResult<Vec<ReviewHandle>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(bind)?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next()? {
            reviews.push(self.instance_from_db(read_review_row(row)?)?);
        }
        Ok(reviews)
    }
}

impl ReviewSource for ReviewRepository<'_> {
    fn reviews_for_employee(&self, employee_id: EmployeeId) -> RepoResult<Vec<ReviewHandle>> {
        self.find_by_employee_id(employee_id)
    }
}

fn read_review_row(row: &Row<'_>) -> rusqlite::Result<ReviewRow> {
    Ok(ReviewRow {
        id: row.get("id")?,
        year: row.get("year")?,
        summary: row.get("summary")?,
        employee_id: row.get("employee_id")?,
    })
}
