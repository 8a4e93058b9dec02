use std::ffi::OsStr;
use std::path::Path;
use sysinfo::{Pid, System};

pub struct ProcessChecker;

impl ProcessChecker {
    /// True if some other process was started from an executable with the
    /// same name as ours. Takes a mutable ref to System to allow sysinfo to
    /// reuse internal buffers.
    pub fn another_instance_running(sys: &mut System) -> bool {
        let (Ok(own_exe), Ok(own_pid)) = (std::env::current_exe(), sysinfo::get_current_pid())
        else {
            return false;
        };
        let Some(own_stem) = own_exe.file_stem() else {
            return false;
        };

        // Refresh only what we need
        sys.refresh_processes();

        sys.processes()
            .iter()
            .any(|(pid, p)| Self::is_other_instance(*pid, p.exe(), own_pid, own_stem))
    }

    fn is_other_instance(pid: Pid, exe: Option<&Path>, own_pid: Pid, own_stem: &OsStr) -> bool {
        pid != own_pid && exe.and_then(Path::file_stem) == Some(own_stem)
    }
}
