mod helpers;

#[path = "batch/batch_admissions.rs"]
mod batch_admissions;
#[path = "batch/batch_admissions_prop.rs"]
mod batch_admissions_prop;
#[path = "batch/batch_builder.rs"]
mod batch_builder;
#[path = "batch/batch_signals.rs"]
mod batch_signals;
#[path = "batch/batch_timeout.rs"]
mod batch_timeout;
