//! End-to-end checks of the scheduling properties through the public API.

use chrono::NaiveDate;
use exam_metaheur::construct::GreedyBuilder;
use exam_metaheur::eval::{Evaluator, PenaltyWeights};
use exam_metaheur::ga::{GaConfig, GaRunner};
use exam_metaheur::ils::{IlsConfig, IlsRunner};
use exam_metaheur::model::{parse_duration, CourseId, ExamProblem, ExamSlot, Schedule, SlotId};

const HARD: i64 = 100_000;
const LIGHT: i64 = 100;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

/// Two together courses A and B, each with its own slot.
fn pair(a: (u32, &str, &str), b: (u32, &str, &str)) -> (ExamProblem, Schedule) {
    let mut builder = ExamProblem::builder();
    let ca = builder.add_course("A");
    let cb = builder.add_course("B");
    let sa = builder.add_slot(ExamSlot::new(date(a.0), a.1, a.2, 200).unwrap());
    let sb = builder.add_slot(ExamSlot::new(date(b.0), b.1, b.2, 200).unwrap());
    let g = builder.add_group("Cohort", 50);
    builder.enroll(g, ca).unwrap();
    builder.enroll(g, cb).unwrap();
    let problem = builder.build();

    let mut s = Schedule::unassigned(2);
    s.assign(ca, sa);
    s.assign(cb, sb);
    (problem, s)
}

/// A mid-sized timetable with several overlapping cohorts.
fn faculty() -> ExamProblem {
    let mut b = ExamProblem::builder();
    let names = [
        "Analysis I", "Linear Algebra", "Programming", "Physics", "Chemistry",
        "Statistics", "Databases", "Networks", "Compilers", "Ethics",
    ];
    let courses: Vec<_> = names.iter().map(|n| b.add_course(*n)).collect();
    let cohorts: [(&str, u32, &[usize]); 5] = [
        ("CS-1", 60, &[0, 1, 2, 9]),
        ("CS-2", 45, &[5, 6, 7, 8]),
        ("PHY-1", 30, &[0, 1, 3, 4]),
        ("CHEM-1", 25, &[3, 4, 5]),
        ("DS-1", 40, &[2, 5, 6]),
    ];
    for (name, size, taken) in cohorts {
        let g = b.add_group(name, size);
        for &c in taken {
            b.enroll(g, courses[c]).unwrap();
        }
    }
    for d in [8, 9, 10, 11, 12, 15, 16] {
        b.add_slot(ExamSlot::new(date(d), "09:00", "2h", 150).unwrap());
        b.add_slot(ExamSlot::new(date(d), "13:00", "2h 30m", 80).unwrap());
    }
    b.build()
}

#[test]
fn evaluator_is_pure() {
    let problem = faculty();
    let schedule = GreedyBuilder::new(&problem).build();
    let copy = schedule.clone();
    let eval = Evaluator::new(&problem, PenaltyWeights::default());
    assert_eq!(eval.evaluate(&schedule), eval.evaluate(&schedule));
    assert_eq!(schedule, copy);
}

#[test]
fn capacity_violation_costs_at_least_one_hard_penalty() {
    let mut b = ExamProblem::builder();
    let c = b.add_course("Big Lecture");
    let s = b.add_slot(ExamSlot::new(date(10), "09:00", "2h", 100).unwrap());
    let g = b.add_group("Everyone", 120);
    b.enroll(g, c).unwrap();
    let problem = b.build();

    let mut schedule = Schedule::unassigned(1);
    schedule.assign(c, s);
    let eval = Evaluator::new(&problem, PenaltyWeights::default());
    assert!(eval.evaluate(&schedule) >= HARD);
}

#[test]
fn overlap_is_counted_from_both_sides() {
    let (problem, s) = pair((10, "09:00", "2h"), (10, "10:00", "1h"));
    let eval = Evaluator::new(&problem, PenaltyWeights::default());
    assert_eq!(eval.evaluate(&s), 2 * HARD);
}

#[test]
fn same_day_without_overlap() {
    let (problem, s) = pair((10, "09:00", "1h"), (10, "11:00", "1h"));
    let eval = Evaluator::new(&problem, PenaltyWeights::default());
    assert_eq!(eval.evaluate(&s), 4 * LIGHT);
}

#[test]
fn consecutive_days() {
    let (problem, s) = pair((10, "09:00", "1h"), (11, "15:00", "1h"));
    let eval = Evaluator::new(&problem, PenaltyWeights::default());
    assert_eq!(eval.evaluate(&s), 2 * LIGHT);
}

#[test]
fn zero_conflict_floor() {
    let (problem, s) = pair((10, "09:00", "1h"), (14, "09:00", "1h"));
    let eval = Evaluator::new(&problem, PenaltyWeights::default());
    assert_eq!(eval.evaluate(&s), 0);
}

#[test]
fn duration_parsing() {
    assert_eq!(parse_duration("2h 30m").unwrap(), 150);
    assert_eq!(parse_duration("1h").unwrap(), 60);
    assert_eq!(parse_duration("45m").unwrap(), 45);
}

#[test]
fn builder_is_deterministic() {
    let problem = faculty();
    let first = GreedyBuilder::new(&problem).build();
    let second = GreedyBuilder::new(&problem).build();
    assert_eq!(first, second);
}

#[test]
fn ga_best_never_regresses() {
    init_tracing();
    let problem = faculty();
    let config = GaConfig::default().with_max_generations(30).with_seed(11);
    let result = GaRunner::new(&problem, config).unwrap().run();

    assert_eq!(result.fitness_history.len(), 31);
    for w in result.fitness_history.windows(2) {
        assert!(w[1] <= w[0], "generation best regressed: {} -> {}", w[0], w[1]);
    }
}

#[test]
fn ils_incumbent_never_regresses() {
    init_tracing();
    let problem = faculty();
    let result = IlsRunner::new(&problem, IlsConfig::default().with_seed(11))
        .unwrap()
        .run();

    assert_eq!(result.fitness_history.len(), 51);
    for w in result.fitness_history.windows(2) {
        assert!(w[1] <= w[0], "incumbent regressed: {} -> {}", w[0], w[1]);
    }
    assert!(result.best_fitness <= result.seed_fitness);
}

#[test]
fn optimizers_never_do_worse_than_seed_best() {
    let problem = faculty();
    let eval = Evaluator::new(&problem, PenaltyWeights::default());
    let seed = GreedyBuilder::new(&problem).build();
    let seed_fitness = eval.evaluate(&seed);

    let ils = IlsRunner::new(&problem, IlsConfig::default().with_seed(3))
        .unwrap()
        .run();
    assert!(ils.best_fitness <= seed_fitness);

    let ga = GaRunner::new(&problem, GaConfig::default().with_seed(3))
        .unwrap()
        .run();
    assert_eq!(ga.seed_fitness, seed_fitness);
    assert_eq!(eval.evaluate(&ga.best), ga.best_fitness);
}

#[test]
fn render_lists_every_course() {
    let problem = faculty();
    let mut schedule = GreedyBuilder::new(&problem).build();
    schedule.unassign(CourseId(0));
    schedule.assign(CourseId(1), SlotId(0));

    let text = problem.render(&schedule).to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Exam Schedule:");
    assert_eq!(lines.len(), problem.course_count() + 1);
    assert_eq!(lines[1], "Analysis I - No valid exam");
    assert_eq!(lines[2], "Linear Algebra - 2024-01-08, 09:00, 2h");
}
