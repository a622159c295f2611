use sqlx::SqliteConnection;

use crate::models::{Building, Course, Instructor, Room, School, Term, TermSubject};

pub async fn fetch_term_ids(db: &mut SqliteConnection) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM terms ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find_term_id_by_name(
    db: &mut SqliteConnection,
    name: &str,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM terms WHERE name = ? ORDER BY id LIMIT 1")
        .bind(name)
        .fetch_optional(db)
        .await
}

pub async fn fetch_school_symbols(db: &mut SqliteConnection) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT symbol FROM schools ORDER BY symbol")
        .fetch_all(db)
        .await
}

pub async fn fetch_subject_symbols_for_term(
    db: &mut SqliteConnection,
    term_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT symbol FROM subjects WHERE term_id = ? ORDER BY symbol")
        .bind(term_id)
        .fetch_all(db)
        .await
}

pub async fn fetch_distinct_subject_symbols(
    db: &mut SqliteConnection,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT DISTINCT symbol FROM subjects ORDER BY symbol")
        .fetch_all(db)
        .await
}

pub async fn fetch_building_ids(db: &mut SqliteConnection) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM buildings ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn insert_term(db: &mut SqliteConnection, term: &Term) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO terms (id, name, start_date, end_date) VALUES (?, ?, ?, ?)")
        .bind(term.id)
        .bind(&term.name)
        .bind(term.start_date)
        .bind(term.end_date)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn insert_school(db: &mut SqliteConnection, school: &School) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO schools (symbol, name) VALUES (?, ?)")
        .bind(&school.symbol)
        .bind(&school.name)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn insert_subject(
    db: &mut SqliteConnection,
    subject: &TermSubject,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO subjects (symbol, name, term_id, school_symbol) VALUES (?, ?, ?, ?)")
        .bind(&subject.symbol)
        .bind(&subject.name)
        .bind(subject.term_id)
        .bind(&subject.school_symbol)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn insert_instructor(
    db: &mut SqliteConnection,
    instructor: &Instructor,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO instructors (id, name, bio, address, phone, office_hours) VALUES (?, ?, ?, ?, ?, ?)"
    )
    .bind(instructor.id)
    .bind(&instructor.name)
    .bind(&instructor.bio)
    .bind(&instructor.address)
    .bind(&instructor.phone)
    .bind(&instructor.office_hours)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn insert_instructor_subject(
    db: &mut SqliteConnection,
    instructor_id: i64,
    symbol: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO instructor_subjects (id, symbol) VALUES (?, ?)")
        .bind(instructor_id)
        .bind(symbol)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn insert_building(
    db: &mut SqliteConnection,
    building: &Building,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO buildings (id, name, lat, lon, nu_maps_link) VALUES (?, ?, ?, ?, ?)")
        .bind(building.id)
        .bind(&building.name)
        .bind(building.lat)
        .bind(building.lon)
        .bind(&building.nu_maps_link)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn insert_room(db: &mut SqliteConnection, room: &Room) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO rooms (id, building_id, name) VALUES (?, ?, ?)")
        .bind(room.id)
        .bind(room.building_id)
        .bind(&room.name)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn insert_course(db: &mut SqliteConnection, course: &Course) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO courses
            (id, title, term, instructor, subject, catalog_num, section, room,
            meeting_days, start_time, end_time, seats, topic, component, class_num, course_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(course.id)
    .bind(&course.title)
    .bind(&course.term)
    .bind(&course.instructor)
    .bind(&course.subject)
    .bind(&course.catalog_num)
    .bind(&course.section)
    .bind(&course.room)
    .bind(&course.meeting_days)
    .bind(&course.start_time)
    .bind(&course.end_time)
    .bind(course.seats)
    .bind(&course.topic)
    .bind(&course.component)
    .bind(course.class_num)
    .bind(course.course_id)
    .execute(db)
    .await?;
    Ok(())
}
