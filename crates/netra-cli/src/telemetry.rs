use sysinfo::{ProcessRefreshKind, System};

/// Resident memory of this process in megabytes, when the platform exposes
/// it.
pub fn resident_memory_mb() -> Option<f64> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut system = System::new();
    system.refresh_process_specifics(pid, ProcessRefreshKind::new().with_memory());
    system
        .process(pid)
        .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
}
