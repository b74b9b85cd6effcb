use mcatools::cfg::{Acquisition, Run};
use mcatools::mode::Mode;
use std::time::Duration;

fn serialize_config(config: &Run) -> String {
    let ser = serde_json::to_string(config).unwrap();
    return ser;
}

fn deserialize_config(config: &str) -> Run {
    let de: Run = serde_json::from_str(config).unwrap();
    return de;
}

#[test]
fn serde_roundtrip() {
    let config = Run {
        description: String::from("test_settings_serde"),
        timestamp: None,
        limit: Some("5 sec".parse::<humantime::Duration>().unwrap().into()),
        acquisition: Some(Acquisition {
            bits: 10,
            dwell: Duration::from_micros(100),
            raster: 128,
            liveness: 4096,
            after_reset: Mode::Halted,
        }),
        events: None,
        maximum: None,
    };
    let serconfig = serialize_config(&config);
    let deconfig = deserialize_config(&serconfig);
    assert_eq!(config, deconfig);
}

#[test]
fn de_simple() {
    let x = r#"{
            "description": "overnight background",
            "limit": "12 hours",
            "acquisition": {
                "bits": 11,
                "dwell": "50us",
                "raster": 256,
                "liveness": 65536,
                "after_reset": "Acquiring"
            }
        }"#;

    let de: Run = serde_json::from_str(x).unwrap();

    let r = Run {
        description: String::from("overnight background"),
        limit: Some(Duration::from_secs(12 * 3600)),
        acquisition: Some(Acquisition::default()),
        ..Default::default()
    };

    assert_eq!(r, de);
}

#[test]
fn defaults() {
    let a = Acquisition::default();
    assert_eq!(a.bits, mcatools::DEFAULT_BITS);
    assert_eq!(1usize << a.bits, 2048);
    assert_eq!(a.after_reset, Mode::Acquiring);
}
