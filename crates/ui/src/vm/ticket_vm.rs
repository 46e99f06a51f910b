use werkstatt_core::Progress;
use werkstatt_core::model::{Phase, ScenarioId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketListItemVm {
    pub id: ScenarioId,
    pub title: String,
    pub difficulty: &'static str,
    pub completed: bool,
    pub active: bool,
}

impl TicketListItemVm {
    #[must_use]
    pub fn marker_class(&self) -> &'static str {
        if self.completed {
            "ticket-marker ticket-marker--done"
        } else if self.active {
            "ticket-marker ticket-marker--active"
        } else {
            "ticket-marker"
        }
    }
}

#[must_use]
pub fn map_ticket_list(progress: &Progress) -> Vec<TicketListItemVm> {
    let current = progress.current_scenario_id();
    progress
        .catalog()
        .iter()
        .map(|scenario| TicketListItemVm {
            id: scenario.id.clone(),
            title: scenario.title.clone(),
            difficulty: scenario.difficulty.label(),
            completed: progress.is_completed(&scenario.id),
            active: current == Some(&scenario.id),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseTabVm {
    pub phase: Phase,
    pub label: &'static str,
    pub active: bool,
    pub unlocked: bool,
}

#[must_use]
pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Briefing => "Posteingang",
        Phase::Diagnosis => "Analyse",
        Phase::Workbench => "Workspace",
        Phase::Completed => "Erledigt",
    }
}

#[must_use]
pub fn map_phase_tabs(progress: &Progress) -> Vec<PhaseTabVm> {
    let unlocked = progress.unlocked_phases();
    let current = progress.phase();
    Phase::TABS
        .into_iter()
        .map(|phase| PhaseTabVm {
            phase,
            label: phase_label(phase),
            active: phase == current,
            unlocked: unlocked.contains(&phase),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressRowVm {
    pub ticket: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressReportVm {
    pub mistakes: u32,
    pub completed: usize,
    pub total: usize,
    pub rows: Vec<ProgressRowVm>,
}

#[must_use]
pub fn map_progress_report(progress: &Progress) -> ProgressReportVm {
    let rows = progress
        .catalog()
        .iter()
        .map(|scenario| ProgressRowVm {
            ticket: scenario.ticket_label(),
            title: scenario.title.clone(),
            completed: progress.is_completed(&scenario.id),
        })
        .collect::<Vec<_>>();
    ProgressReportVm {
        mistakes: progress.mistakes(),
        completed: progress.completed().len(),
        total: rows.len(),
        rows,
    }
}
