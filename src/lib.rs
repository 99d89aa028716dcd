//! Examination timetabling with metaheuristics.
//!
//! Assigns exam slots to courses under hard rules (seating capacity, no
//! student group sitting two overlapping exams) and soft rules (spread a
//! cohort's exams across days), minimizing a weighted penalty.
//!
//! - **Model** ([`model`]): slots, courses, student groups and the dense
//!   [`Schedule`](model::Schedule) representation.
//! - **Evaluation** ([`eval`]): the single pure fitness function every
//!   strategy compares schedules with.
//! - **Construction** ([`construct`]): deterministic greedy seed.
//! - **Genetic Algorithm** ([`ga`]): elitist truncation selection,
//!   single-point crossover, subset mutation.
//! - **Iterated Local Search** ([`ils`]): random perturbation followed by
//!   randomized swap descent.
//! - **Exact solvers** ([`exact`]): trait seam for external backends.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use exam_metaheur::ga::{GaConfig, GaRunner};
//! use exam_metaheur::ils::{IlsConfig, IlsRunner};
//! use exam_metaheur::model::{ExamProblem, ExamSlot};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let mut b = ExamProblem::builder();
//! let math = b.add_course("Math");
//! let physics = b.add_course("Physics");
//! b.add_slot(ExamSlot::new(day(10), "09:00", "2h", 100).unwrap());
//! b.add_slot(ExamSlot::new(day(12), "09:00", "2h", 100).unwrap());
//! let cohort = b.add_group("CS-1", 60);
//! b.enroll(cohort, math).unwrap();
//! b.enroll(cohort, physics).unwrap();
//! let problem = b.build();
//!
//! let ga = GaRunner::new(&problem, GaConfig::default().with_seed(1)).unwrap().run();
//! let ils = IlsRunner::new(&problem, IlsConfig::default().with_seed(1)).unwrap().run();
//! assert_eq!(ga.best_fitness, 0);
//! assert_eq!(ils.best_fitness, 0);
//! println!("{}", problem.render(&ga.best));
//! ```

pub mod construct;
mod error;
pub mod eval;
pub mod exact;
pub mod ga;
pub mod ils;
pub mod model;
pub mod perturb;
pub mod random;

#[cfg(test)]
mod testkit;

pub use error::{Error, Result};
