pub mod building;
pub mod course;
pub mod instructor;
pub mod room;
pub mod school;
pub mod subject;
pub mod term;

pub use building::Building;
pub use course::Course;
pub use instructor::Instructor;
pub use room::Room;
pub use school::School;
pub use subject::{Subject, TermSubject};
pub use term::Term;
