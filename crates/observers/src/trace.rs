//! Text trace of a descent run.
//!
//! Each accepted step is written as a direction line, a current point line,
//! and a blank separator:
//!
//! ```text
//! anti-gradient:[-0.800000 -0.400000]
//! current point:[1.920 0.960 4.608]
//!
//! ```
//!
//! Fixed-length steps label the direction `    step vector` instead.
//!
//! A diverged run can finish its trace with [`TraceObserver::rejected`],
//! which writes the direction of the step that ended the run.

use std::io::{self, Write};

use gradwalk_core::{Observer, Vector};
use gradwalk_solvers::optimization::descent::{Action, Error, Event, Policy};

/// Writes one trace record per accepted step.
///
/// The trace never steers the solver: it always returns `None`.
/// Write failures do not interrupt the run. The first one is kept and
/// reported by [`TraceObserver::finish`], and later events are dropped.
#[derive(Debug)]
pub struct TraceObserver<W: Write> {
    writer: W,
    label: &'static str,
    error: Option<io::Error>,
}

impl<W: Write> TraceObserver<W> {
    /// Creates a trace that labels directions the way `policy` produces them.
    pub fn new(writer: W, policy: &Policy) -> Self {
        let label = match policy {
            Policy::FixedStep(_) => "    step vector",
            Policy::GradientStep(_) => "anti-gradient",
        };
        Self {
            writer,
            label,
            error: None,
        }
    }

    /// Writes the direction of the step that made the run diverge.
    ///
    /// Nothing is written when the run diverged before a direction could be
    /// computed.
    pub fn rejected(&mut self, error: &Error) {
        let Some(direction) = error.direction() else {
            return;
        };
        if self.error.is_none() {
            let written = self
                .direction(direction)
                .and_then(|()| writeln!(self.writer));
            if let Err(err) = written {
                self.error = Some(err);
            }
        }
    }

    /// Flushes the writer and hands it back.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen during the run, or a flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn direction(&mut self, direction: Vector) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}:[{:.6} {:.6}]",
            self.label, direction.x, direction.y
        )
    }

    fn record(&mut self, event: &Event) -> io::Result<()> {
        let Event {
            direction,
            point,
            objective,
            ..
        } = event;
        self.direction(*direction)?;
        writeln!(
            self.writer,
            "current point:[{:.3} {:.3} {:.3}]",
            point.x, point.y, objective
        )?;
        writeln!(self.writer)
    }
}

impl<W: Write> Observer<Event, Action> for TraceObserver<W> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        if self.error.is_none() {
            if let Err(err) = self.record(event) {
                self.error = Some(err);
            }
        }
        None
    }
}

impl<W: Write> Observer<Event, Action> for &mut TraceObserver<W> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gradwalk_core::Point;
    use gradwalk_solvers::optimization::descent::{self, Config};

    fn event() -> Event {
        Event {
            step: 1,
            direction: Vector::new(-0.8, -0.4),
            gain: 0.1,
            point: Point::new(1.92, 0.96),
            objective: 4.608,
            gradient: Vector::new(3.84, 1.92),
        }
    }

    fn traced(policy: &Policy) -> String {
        let mut trace = TraceObserver::new(Vec::new(), policy);
        assert!(trace.observe(&event()).is_none());
        let bytes = trace.finish().expect("in-memory writes succeed");
        String::from_utf8(bytes).expect("trace is utf-8")
    }

    #[test]
    fn gradient_step_records_anti_gradient() {
        assert_eq!(
            traced(&Policy::gradient_step()),
            "anti-gradient:[-0.800000 -0.400000]\n\
             current point:[1.920 0.960 4.608]\n\n"
        );
    }

    #[test]
    fn fixed_step_records_step_vector() {
        assert_eq!(
            traced(&Policy::fixed_step()),
            "    step vector:[-0.800000 -0.400000]\n\
             current point:[1.920 0.960 4.608]\n\n"
        );
    }

    #[test]
    fn rejected_step_closes_the_trace() {
        let mut trace = TraceObserver::new(Vec::new(), &Policy::gradient_step());
        let rejected = Error::NoImprovement {
            step: 2,
            best: Point::new(1.92, 0.96),
            best_objective: 4.608,
            direction: Vector::new(-3.84, -1.92),
            rejected: 4.7,
        };

        trace.observe(&event());
        trace.rejected(&rejected);

        let text = String::from_utf8(trace.finish().expect("writes succeed")).expect("utf-8");
        assert!(text.ends_with(
            "current point:[1.920 0.960 4.608]\n\n\
             anti-gradient:[-3.840000 -1.920000]\n\n"
        ));
    }

    #[test]
    fn rejected_without_direction_writes_nothing() {
        let mut trace = TraceObserver::new(Vec::new(), &Policy::fixed_step());

        trace.rejected(&Error::NonFinite {
            step: 1,
            best: Point::new(2.0, 1.0),
            best_objective: f64::NAN,
            direction: None,
        });

        assert!(trace.finish().expect("writes succeed").is_empty());
    }

    #[test]
    fn traces_every_accepted_step_of_a_run() {
        let config = Config::fixed_step().with_max_iters(3);
        let mut trace = TraceObserver::new(Vec::new(), config.policy());

        let solution = descent::minimize(
            &gradwalk_core::surface::Paraboloid,
            Point::new(2.0, 1.0),
            &config,
            &mut trace,
        )
        .expect("stops at the cap");

        let text = String::from_utf8(trace.finish().expect("writes succeed")).expect("utf-8");
        assert_eq!(solution.iters, 3);
        assert_eq!(text.matches("    step vector:[").count(), 3);
        assert_eq!(text.matches("current point:[").count(), 3);
        assert!(text.ends_with("\n\n"));
    }

    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_surface_on_finish() {
        let mut trace = TraceObserver::new(Broken, &Policy::gradient_step());

        assert!(trace.observe(&event()).is_none());
        assert!(trace.observe(&event()).is_none());

        let err = trace.finish().expect_err("first write failed");
        assert_eq!(err.to_string(), "closed");
    }
}
