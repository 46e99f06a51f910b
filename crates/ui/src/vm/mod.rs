mod delayed;
mod diagnosis_vm;
mod ticket_vm;
mod workbench_vm;

pub use delayed::{DelayedTransition, use_delayed_transition};
pub use diagnosis_vm::{DiagnosisOptionVm, OptionState, analysis_tip, map_diagnosis_options};
pub use ticket_vm::{
    PhaseTabVm, ProgressReportVm, ProgressRowVm, TicketListItemVm, map_phase_tabs,
    map_progress_report, map_ticket_list, phase_label,
};
pub use workbench_vm::{CHECK_LABEL, CHECKING_LABEL, WorkbenchVm};
