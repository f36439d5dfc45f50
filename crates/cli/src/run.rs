//! Runs descents from each start and reports the results.

use std::io::Write;

use anyhow::{Context, Result};
use gradwalk_core::{Objective, Observer, Point};
use gradwalk_observers::TraceObserver;
use gradwalk_solvers::optimization::descent::{self, Event, Solution, Status};
use rayon::prelude::*;
use yansi::Paint;

use crate::config::Settings;

pub const FOUND: &str = "The closest local minimum of given function is";
pub const NOT_FOUND: &str = "Couldn't find local minimum from given point, try another point";

/// Result of the descent from one start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub start: Point,
    pub result: Result<Solution, descent::Error>,
}

/// Results of every descent in a run, in the order the starts were given.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Returns the lowest minimum among the runs that did not diverge.
    #[must_use]
    pub fn best(&self) -> Option<&Solution> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .min_by(|a, b| a.objective.total_cmp(&b.objective))
    }

    #[must_use]
    pub fn all_diverged(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_err())
    }
}

/// Runs a descent from every start and writes the traces and results to `out`.
///
/// A single start streams its trace as it runs. Several starts run in
/// parallel; each trace is buffered and written in the order the starts were
/// given, followed by the lowest minimum found.
///
/// # Errors
///
/// Fails only if writing to `out` fails. Diverged descents are reported in
/// the returned [`Report`], not as errors.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Report> {
    let objective = settings.surface.objective(settings.level);
    let objective = &*objective;

    let outcomes = if let [start] = settings.starts[..] {
        let (result, _) = descend(objective, start, settings, &mut *out)?;
        write_result(out, &result)?;
        vec![Outcome { start, result }]
    } else {
        let traced = settings
            .starts
            .par_iter()
            .map(|&start| {
                let (result, trace) = descend(objective, start, settings, Vec::new())?;
                Ok::<_, anyhow::Error>((Outcome { start, result }, trace))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut outcomes = Vec::with_capacity(traced.len());
        for (outcome, trace) in traced {
            let Point { x, y } = outcome.start;
            writeln!(out, "{}", Paint::cyan(format!("start:[{x:.3} {y:.3}]")).bold())?;
            out.write_all(&trace)?;
            write_result(out, &outcome.result)?;
            writeln!(out)?;
            outcomes.push(outcome);
        }
        outcomes
    };

    let report = Report { outcomes };
    if report.outcomes.len() > 1 {
        if let Some(best) = report.best() {
            let Point { x, y } = best.point;
            let line = format!(
                "Lowest minimum over {} starts: [{x:.3} {y:.3} {:.3}]",
                report.outcomes.len(),
                best.objective
            );
            writeln!(out, "{}", Paint::green(line).bold())?;
        }
    }
    out.flush().context("could not write results")?;

    Ok(report)
}

fn descend<W: Write>(
    objective: &(dyn Objective + Sync),
    start: Point,
    settings: &Settings,
    writer: W,
) -> Result<(Result<Solution, descent::Error>, W)> {
    let quiet = settings.quiet;
    let mut trace = TraceObserver::new(writer, settings.descent.policy());

    let result = descent::minimize(objective, start, &settings.descent, |event: &Event| {
        if quiet { None } else { trace.observe(event) }
    });
    if let Err(err) = &result {
        if !quiet {
            trace.rejected(err);
        }
    }

    let writer = trace.finish().context("could not write trace")?;
    Ok((result, writer))
}

fn write_result<W: Write>(out: &mut W, result: &Result<Solution, descent::Error>) -> Result<()> {
    match result {
        Ok(solution) => {
            let Point { x, y } = solution.point;
            let line = format!("{FOUND}: [{x:.3} {y:.3} {:.3}]", solution.objective);
            if solution.status == Status::MaxIters {
                writeln!(out, "{}", Paint::yellow(line))?;
                writeln!(
                    out,
                    "{}",
                    Paint::yellow(format!(
                        "(step limit of {} reached before converging)",
                        solution.iters
                    ))
                    .dimmed()
                )?;
            } else {
                writeln!(out, "{}", Paint::green(line))?;
            }
        }
        Err(err) => {
            writeln!(out, "{}", Paint::red(NOT_FOUND))?;
            writeln!(out, "{}", Paint::red(format!("({err})")).dimmed())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use gradwalk_solvers::optimization::descent::{Config, Error};

    use crate::args::Surface;

    fn settings(surface: Surface, starts: &[Point], descent: Config) -> Settings {
        Settings {
            surface,
            level: 5.0,
            starts: starts.to_vec(),
            descent,
            quiet: false,
        }
    }

    fn solution(objective: f64) -> Solution {
        Solution {
            status: Status::Converged,
            point: Point::default(),
            objective,
            gradient: gradwalk_core::Vector::ZERO,
            iters: 1,
        }
    }

    fn diverged() -> Result<Solution, Error> {
        Err(Error::NonFinite {
            step: 1,
            best: Point::default(),
            best_objective: 0.0,
            direction: None,
        })
    }

    #[test]
    fn best_skips_diverged_runs() {
        let report = Report {
            outcomes: [Ok(solution(1.0)), diverged(), Ok(solution(-2.0))]
                .into_iter()
                .map(|result| Outcome {
                    start: Point::default(),
                    result,
                })
                .collect(),
        };

        assert_relative_eq!(report.best().expect("two runs converged").objective, -2.0);
        assert!(!report.all_diverged());
    }

    #[test]
    fn all_diverged_has_no_best() {
        let report = Report {
            outcomes: vec![Outcome {
                start: Point::default(),
                result: diverged(),
            }],
        };

        assert!(report.best().is_none());
        assert!(report.all_diverged());
    }

    #[test]
    fn single_flat_start_reports_immediately() {
        Paint::disable();
        let settings = settings(Surface::Flat, &[Point::new(2.0, 1.0)], Config::gradient_step());
        let mut out = Vec::new();

        let report = run(&settings, &mut out).expect("in-memory writes succeed");

        let text = String::from_utf8(out).expect("utf-8");
        assert_eq!(text, format!("{FOUND}: [2.000 1.000 5.000]\n"));
        assert_eq!(report.outcomes.len(), 1);
    }

    #[test]
    fn multi_start_keeps_input_order() {
        Paint::disable();
        let starts = [Point::new(2.0, 1.0), Point::new(-1.0, 0.5), Point::new(0.3, -0.7)];
        let settings = settings(Surface::EggCrate, &starts, Config::gradient_step());
        let mut out = Vec::new();

        let report = run(&settings, &mut out).expect("in-memory writes succeed");

        let reported: Vec<Point> = report.outcomes.iter().map(|o| o.start).collect();
        assert_eq!(reported, starts);

        let text = String::from_utf8(out).expect("utf-8");
        let first = text.find("start:[2.000 1.000]").expect("first header");
        let second = text.find("start:[-1.000 0.500]").expect("second header");
        let third = text.find("start:[0.300 -0.700]").expect("third header");
        assert!(first < second && second < third);
        assert!(text.contains("Lowest minimum over 3 starts"));
    }
}
