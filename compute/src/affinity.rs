// pin host compute-unit threads to cpu cores

use crate::error::AffinityError;

// cpu_set_t capacity in glibc
#[cfg(target_os = "linux")]
const CPU_SETSIZE: usize = 1024;

// pin the calling thread to one core
#[cfg(target_os = "linux")]
pub fn pin_current_thread(core: usize) -> Result<(), AffinityError> {
    let max = max_cpu_id()?.min(CPU_SETSIZE - 1);
    if core > max {
        return Err(AffinityError::InvalidCpu { cpu: core, max });
    }

    // safety: cpu_set_t is pod, zeroed is the empty set
    let mut cpu_set: libc::cpu_set_t = unsafe { std::mem::zeroed() };

    // safety: core validated against CPU_SETSIZE above
    unsafe { libc::CPU_SET(core, &mut cpu_set) };

    // safety: pid 0 is the calling thread, set and size are valid
    let result = unsafe {
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &cpu_set)
    };

    if result != 0 {
        return Err(AffinityError::Io(std::io::Error::last_os_error()));
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn pin_current_thread(_core: usize) -> Result<(), AffinityError> {
    Err(AffinityError::NotSupported)
}

// highest online cpu id
#[cfg(target_os = "linux")]
pub fn max_cpu_id() -> Result<usize, AffinityError> {
    // "0-127", "0-3,8-11" or "0"
    if let Ok(content) = std::fs::read_to_string("/sys/devices/system/cpu/online") {
        let last = content.trim().rsplit(|c: char| c == '-' || c == ',').next().unwrap_or("");
        if let Ok(max) = last.parse::<usize>() {
            return Ok(max);
        }
    }

    // safety: sysconf has no preconditions
    let count = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    if count <= 0 {
        return Err(AffinityError::Io(std::io::Error::last_os_error()));
    }
    Ok((count as usize).saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn test_max_cpu_id() {
        let max = max_cpu_id().unwrap();
        assert!(max < CPU_SETSIZE);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_pin_rejects_unknown_core() {
        let err = pin_current_thread(CPU_SETSIZE + 1).unwrap_err();
        assert!(matches!(err, AffinityError::InvalidCpu { .. }));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_pin_core_zero() {
        // core 0 is always online; sandboxes may still refuse the syscall
        std::thread::spawn(|| match pin_current_thread(0) {
            Ok(()) | Err(AffinityError::Io(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        })
        .join()
        .unwrap();
    }
}
