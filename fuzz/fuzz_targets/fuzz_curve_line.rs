#![no_main]

use draggable_curve_editor::{parse_curve_file, Curve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let load = parse_curve_file(text);
    for curve in &load.curves {
        // Gelesene Kurven müssen sich verlustfrei wieder schreiben lassen
        let reparsed = Curve::deserialize(&curve.serialize());
        assert!(reparsed.is_ok());
        let _ = curve.is_self_intersecting();
    }
});
