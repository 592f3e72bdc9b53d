use chrono::SecondsFormat;
use crashsig_types::CrashEntry;

use crate::presentation::view_models::{CrashListViewModel, CrashRowViewModel};

pub fn present_crash_list(crashes: &[CrashEntry]) -> CrashListViewModel {
    let crashes: Vec<CrashRowViewModel> = crashes
        .iter()
        .enumerate()
        .map(|(index, crash)| CrashRowViewModel {
            index,
            id: crash.id,
            created: crash.created.to_rfc3339_opts(SecondsFormat::Secs, true),
            product: crash.product.clone(),
            version: crash.version.clone(),
            platform: crash.platform.clone(),
            os: crash.os.clone(),
            testcase_quality: crash.testcase_quality,
            short_signature: crash.short_signature.clone(),
        })
        .collect();

    CrashListViewModel {
        total: crashes.len(),
        crashes,
    }
}
