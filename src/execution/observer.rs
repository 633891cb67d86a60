use std::time::Duration;

use crate::stats::ReportKind;

/// Events emitted by the [`super::ReportEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionEvent {
    RunStarted { records: usize },
    ReportStarted { kind: ReportKind },
    ReportFinished { kind: ReportKind, elapsed: Duration },
    RunFinished { elapsed: Duration },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// Logs execution events through the `log` facade.
#[derive(Debug, Default)]
pub struct LogExecutionObserver;

impl ExecutionObserver for LogExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunStarted { records } => {
                log::debug!("computing reports over {records} records")
            }
            ExecutionEvent::ReportStarted { kind } => log::debug!("calculating {kind}..."),
            ExecutionEvent::ReportFinished { kind, elapsed } => {
                log::info!("{kind}: this took {:.6} seconds", elapsed.as_secs_f64())
            }
            ExecutionEvent::RunFinished { elapsed } => {
                log::info!("all reports took {:.6} seconds", elapsed.as_secs_f64())
            }
        }
    }
}
