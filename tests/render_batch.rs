//! End-to-end: witness artifacts on disk → WAV wavetables on disk.

use std::path::Path;

use proptest::prelude::*;

use sonic_cannon::batch::BatchRunner;
use sonic_cannon::params::WavetableConfig;
use sonic_cannon::pipeline::{decode_witness, tile};

fn write_artifact(dir: &Path, name: &str, records: usize, seed: u64) {
    let text: String = (0..records)
        .map(|i| {
            let v = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(seed);
            format!("{:064x}", v)
        })
        .collect();
    std::fs::write(dir.join(name), format!("{}\n", text)).unwrap();
}

fn config_for(root: &Path, out: &str, names: &[&str]) -> WavetableConfig {
    let output_dir = root.join(out);
    std::fs::create_dir_all(&output_dir).unwrap();
    WavetableConfig {
        input_dir: root.join("artifacts"),
        output_dir,
        names: names.iter().map(|n| n.to_string()).collect(),
        ..WavetableConfig::default()
    }
}

#[test]
fn test_batch_writes_full_wavetables() {
    let root = tempfile::tempdir().unwrap();
    let artifacts = root.path().join("artifacts");
    std::fs::create_dir(&artifacts).unwrap();
    write_artifact(&artifacts, "w_1_lagrange", 4096, 17);
    write_artifact(&artifacts, "q_arith_lagrange", 3, 99);

    let config = config_for(root.path(), "out", &["w_1_lagrange", "q_arith_lagrange"]);
    let mut runner = BatchRunner::new(config).unwrap();
    let outcomes = runner.run();

    for outcome in &outcomes {
        let file = outcome.result.as_ref().unwrap();
        assert_eq!(file.frames, 32768);

        let mut reader = hound::WavReader::open(&file.output_path).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().bits_per_sample, 16);
        assert_eq!(reader.duration(), 32768);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 32768);
    }

    let path = root.path().join("out/w_1_lagrange_wavetable.wav");
    let mut reader = hound::WavReader::open(path).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert!(samples.contains(&-32768));
    assert!(samples.contains(&32767));
}

#[test]
fn test_batch_output_is_byte_identical() {
    let root = tempfile::tempdir().unwrap();
    let artifacts = root.path().join("artifacts");
    std::fs::create_dir(&artifacts).unwrap();
    write_artifact(&artifacts, "q_sort_lagrange", 777, 3);

    for out in ["first", "second"] {
        let config = config_for(root.path(), out, &["q_sort_lagrange"]);
        let outcomes = BatchRunner::new(config).unwrap().run();
        assert!(outcomes[0].result.is_ok());
    }

    let first = std::fs::read(root.path().join("first/q_sort_lagrange_wavetable.wav")).unwrap();
    let second = std::fs::read(root.path().join("second/q_sort_lagrange_wavetable.wav")).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn test_decoder_yields_one_value_per_chunk(digits in "[0-9a-fA-F]{0,640}") {
        let usable = digits.len() - digits.len() % 64;
        let text = &digits[..usable];

        let values = decode_witness(text, true).unwrap();
        prop_assert_eq!(values.len(), usable / 64);
        for v in &values {
            prop_assert!(v.bits() <= 256);
        }
    }

    #[test]
    fn test_tiler_length_is_fixed(signal in proptest::collection::vec(-32768.0f64..32767.0, 0..3000)) {
        prop_assert_eq!(tile(&signal, 32, 1024).len(), 32768);
    }
}
