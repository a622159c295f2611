use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::Serialize;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, error, info, warn};

use crate::db::repository;
use crate::error::AppError;
use crate::models::{Course, Instructor, TermSubject};
use crate::nuapi::{NuApiClient, dto::BuildingsQuery};
use crate::services::plan::{CourseScope, SyncPlan, SyncStep};

pub struct SyncService {
    db: SqlitePool,
    api: Arc<dyn NuApiClient>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SyncStats {
    pub terms: usize,
    pub schools: usize,
    pub subjects: usize,
    pub instructors: usize,
    pub instructor_subjects: usize,
    pub buildings: usize,
    pub rooms: usize,
    pub courses: usize,
    pub duplicates_skipped: usize,
    pub committed: bool,
}

impl SyncService {
    pub fn new(db: SqlitePool, api: Arc<dyn NuApiClient>) -> Self {
        Self { db, api }
    }

    /// Runs every step of `plan` inside one transaction. Any failure rolls
    /// the whole transaction back; a dry run rolls back after success.
    pub async fn run(&self, plan: &SyncPlan) -> Result<SyncStats, AppError> {
        let steps = plan.steps();
        if steps.is_empty() {
            warn!("Nothing selected to sync");
        }

        let mut stats = SyncStats::default();
        let mut tx = self.db.begin().await?;

        for step in &steps {
            info!("Syncing {}", step);
            let result = self.run_step(&mut tx, step, &mut stats).await;
            if let Err(e) = result {
                warn!("Sync of {} failed, rolling back: {}", step, e);
                if let Err(rollback_err) = tx.rollback().await {
                    error!("Rollback failed: {}", rollback_err);
                }
                return Err(e);
            }
        }

        if plan.dry_run {
            tx.rollback().await?;
            info!("Dry run, rolled back: {:?}", stats);
        } else {
            tx.commit().await?;
            stats.committed = true;
            info!("Sync committed: {:?}", stats);
        }
        Ok(stats)
    }

    async fn run_step(
        &self,
        conn: &mut SqliteConnection,
        step: &SyncStep,
        stats: &mut SyncStats,
    ) -> Result<(), AppError> {
        match step {
            SyncStep::Terms => stats.terms = self.sync_terms(conn).await?,
            SyncStep::Schools => stats.schools = self.sync_schools(conn).await?,
            SyncStep::Subjects => stats.subjects = self.sync_subjects(conn).await?,
            SyncStep::Instructors => {
                let (instructors, links, skipped) = self.sync_instructors(conn).await?;
                stats.instructors = instructors;
                stats.instructor_subjects = links;
                stats.duplicates_skipped += skipped;
            }
            SyncStep::Buildings => stats.buildings = self.sync_buildings(conn).await?,
            SyncStep::Rooms => stats.rooms = self.sync_rooms(conn).await?,
            SyncStep::Courses(scope) => {
                let (courses, skipped) = match scope {
                    CourseScope::Term(name) => self.sync_term_courses(conn, name).await?,
                    CourseScope::All => self.sync_all_courses(conn).await?,
                };
                stats.courses = courses;
                stats.duplicates_skipped += skipped;
            }
        }
        Ok(())
    }

    pub async fn sync_terms(&self, conn: &mut SqliteConnection) -> Result<usize, AppError> {
        let terms = self.api.terms().await?;
        for term in &terms {
            repository::insert_term(conn, term).await?;
        }
        info!("Inserted {} terms", terms.len());
        Ok(terms.len())
    }

    pub async fn sync_schools(&self, conn: &mut SqliteConnection) -> Result<usize, AppError> {
        let schools = self.api.schools().await?;
        for school in &schools {
            repository::insert_school(conn, school).await?;
        }
        info!("Inserted {} schools", schools.len());
        Ok(schools.len())
    }

    /// Fetches subjects for every known (term, school) pair. The same symbol
    /// may come back under several terms; each pair is written as its own row.
    pub async fn sync_subjects(&self, conn: &mut SqliteConnection) -> Result<usize, AppError> {
        let term_ids = repository::fetch_term_ids(conn).await?;
        let schools = repository::fetch_school_symbols(conn).await?;

        let mut inserted = 0;
        for &term_id in &term_ids {
            for school in &schools {
                let subjects = self.api.subjects(term_id, school).await?;
                debug!("term {} school {}: {} subjects", term_id, school, subjects.len());
                for subject in subjects {
                    let row = TermSubject::new(subject, term_id, school);
                    repository::insert_subject(conn, &row).await?;
                    inserted += 1;
                }
            }
        }
        info!(
            "Inserted {} subjects across {} terms and {} schools",
            inserted,
            term_ids.len(),
            schools.len()
        );
        Ok(inserted)
    }

    /// Returns (instructors inserted, links inserted, duplicates skipped).
    pub async fn sync_instructors(
        &self,
        conn: &mut SqliteConnection,
    ) -> Result<(usize, usize, usize), AppError> {
        let subjects = repository::fetch_distinct_subject_symbols(conn).await?;

        let mut instructors: BTreeMap<i64, Instructor> = BTreeMap::new();
        let mut links: BTreeMap<String, BTreeSet<i64>> = BTreeMap::new();
        let mut skipped = 0;

        for subject in &subjects {
            let fetched = self.api.instructors(subject).await?;
            debug!("subject {}: {} instructors", subject, fetched.len());
            for instructor in fetched {
                let id = instructor.id;
                if instructor.subjects.is_empty() {
                    links.entry(subject.clone()).or_default().insert(id);
                } else {
                    for symbol in &instructor.subjects {
                        links.entry(symbol.clone()).or_default().insert(id);
                    }
                }
                if instructors.contains_key(&id) {
                    skipped += 1;
                } else {
                    instructors.insert(id, instructor);
                }
            }
        }

        for instructor in instructors.values() {
            repository::insert_instructor(conn, instructor).await?;
        }

        let mut link_count = 0;
        for (symbol, ids) in &links {
            for &id in ids {
                repository::insert_instructor_subject(conn, id, symbol).await?;
                link_count += 1;
            }
        }

        info!(
            "Inserted {} instructors and {} subject links ({} duplicates skipped)",
            instructors.len(),
            link_count,
            skipped
        );
        Ok((instructors.len(), link_count, skipped))
    }

    pub async fn sync_buildings(&self, conn: &mut SqliteConnection) -> Result<usize, AppError> {
        let buildings = self.api.buildings(&BuildingsQuery::default()).await?;
        for building in &buildings {
            repository::insert_building(conn, building).await?;
        }
        info!("Inserted {} buildings", buildings.len());
        Ok(buildings.len())
    }

    /// Rooms are written under the building they were fetched for.
    pub async fn sync_rooms(&self, conn: &mut SqliteConnection) -> Result<usize, AppError> {
        let building_ids = repository::fetch_building_ids(conn).await?;

        let mut inserted = 0;
        for &building_id in &building_ids {
            let rooms = self.api.rooms(building_id).await?;
            debug!("building {}: {} rooms", building_id, rooms.len());
            for mut room in rooms {
                if room.building_id != building_id {
                    debug!(
                        "room {} reported building {}, storing under {}",
                        room.id, room.building_id, building_id
                    );
                    room.building_id = building_id;
                }
                repository::insert_room(conn, &room).await?;
                inserted += 1;
            }
        }
        info!("Inserted {} rooms across {} buildings", inserted, building_ids.len());
        Ok(inserted)
    }

    /// Returns (courses inserted, duplicates skipped).
    pub async fn sync_term_courses(
        &self,
        conn: &mut SqliteConnection,
        term_name: &str,
    ) -> Result<(usize, usize), AppError> {
        let term_id = repository::find_term_id_by_name(conn, term_name)
            .await?
            .ok_or_else(|| AppError::TermNotFound(term_name.to_string()))?;

        let mut courses = BTreeMap::new();
        let skipped = self.collect_courses(conn, term_id, &mut courses).await?;
        let inserted = insert_courses(conn, &courses).await?;

        info!(
            "Inserted {} courses for term {} ({} duplicates skipped)",
            inserted, term_name, skipped
        );
        Ok((inserted, skipped))
    }

    /// Returns (courses inserted, duplicates skipped). Dedup spans every term.
    pub async fn sync_all_courses(
        &self,
        conn: &mut SqliteConnection,
    ) -> Result<(usize, usize), AppError> {
        let term_ids = repository::fetch_term_ids(conn).await?;

        let mut courses = BTreeMap::new();
        let mut skipped = 0;
        for &term_id in &term_ids {
            skipped += self.collect_courses(conn, term_id, &mut courses).await?;
        }
        let inserted = insert_courses(conn, &courses).await?;

        info!(
            "Inserted {} courses across {} terms ({} duplicates skipped)",
            inserted,
            term_ids.len(),
            skipped
        );
        Ok((inserted, skipped))
    }

    /// Fetches courses for each subject of `term_id`, keeping the first
    /// record seen per course id. Returns the number of duplicates dropped.
    async fn collect_courses(
        &self,
        conn: &mut SqliteConnection,
        term_id: i64,
        courses: &mut BTreeMap<i64, Course>,
    ) -> Result<usize, AppError> {
        let subjects = repository::fetch_subject_symbols_for_term(conn, term_id).await?;

        let mut skipped = 0;
        for subject in &subjects {
            let fetched = self.api.courses(term_id, subject).await?;
            debug!("term {} subject {}: {} courses", term_id, subject, fetched.len());
            for course in fetched {
                if courses.contains_key(&course.id) {
                    skipped += 1;
                } else {
                    courses.insert(course.id, course);
                }
            }
        }
        Ok(skipped)
    }
}

async fn insert_courses(
    conn: &mut SqliteConnection,
    courses: &BTreeMap<i64, Course>,
) -> Result<usize, AppError> {
    for course in courses.values() {
        repository::insert_course(conn, course).await?;
    }
    Ok(courses.len())
}
