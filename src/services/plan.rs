use std::fmt;

/// Which terms a course sync covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseScope {
    All,
    Term(String),
}

impl CourseScope {
    /// `all` selects every term; anything else is a term name.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Term(value.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStep {
    Terms,
    Schools,
    Subjects,
    Instructors,
    Buildings,
    Rooms,
    Courses(CourseScope),
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStep::Terms => write!(f, "terms"),
            SyncStep::Schools => write!(f, "schools"),
            SyncStep::Subjects => write!(f, "subjects"),
            SyncStep::Instructors => write!(f, "instructors"),
            SyncStep::Buildings => write!(f, "buildings"),
            SyncStep::Rooms => write!(f, "rooms"),
            SyncStep::Courses(CourseScope::All) => write!(f, "courses (all terms)"),
            SyncStep::Courses(CourseScope::Term(name)) => write!(f, "courses ({})", name),
        }
    }
}

/// The entity kinds one run syncs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub courses: Option<CourseScope>,
    pub terms: bool,
    pub schools: bool,
    pub subjects: bool,
    pub instructors: bool,
    pub buildings: bool,
    pub rooms: bool,
    pub dry_run: bool,
}

impl SyncPlan {
    /// A course sync runs alone. Otherwise the selected kinds run in
    /// dependency order.
    pub fn steps(&self) -> Vec<SyncStep> {
        if let Some(scope) = &self.courses {
            return vec![SyncStep::Courses(scope.clone())];
        }

        [
            (self.terms, SyncStep::Terms),
            (self.schools, SyncStep::Schools),
            (self.subjects, SyncStep::Subjects),
            (self.instructors, SyncStep::Instructors),
            (self.buildings, SyncStep::Buildings),
            (self.rooms, SyncStep::Rooms),
        ]
        .into_iter()
        .filter_map(|(selected, step)| selected.then_some(step))
        .collect()
    }
}
