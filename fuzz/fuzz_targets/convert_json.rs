#![no_main]

use i18n_json2po::convert;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|json: &str| {
    let _ = convert(json, None, true);
});
