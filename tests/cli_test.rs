use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*;
use std::process::Command; // Run programs
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Compresses `data` then decompresses the result through the built binary, and
/// asserts the round trip recovers the original bytes exactly.
fn round_trip(data: &[u8]) -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("input.bin");
    let compressed_path = temp_dir.path().join("compressed.ah");
    let expanded_path = temp_dir.path().join("expanded.bin");
    std::fs::write(&in_path,data)?;

    Command::cargo_bin("adaptive-huffman")?
        .arg("compress")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&compressed_path)
        .assert()
        .success();

    Command::cargo_bin("adaptive-huffman")?
        .arg("decompress")
        .arg("-i").arg(&compressed_path)
        .arg("-o").arg(&expanded_path)
        .assert()
        .success();

    let expanded = std::fs::read(&expanded_path)?;
    assert_eq!(expanded,data);
    Ok(())
}

#[test]
fn round_trips_empty_file() -> STDRESULT {
    round_trip(b"")
}

#[test]
fn round_trips_small_text() -> STDRESULT {
    round_trip(b"I am Sam. Sam I am. I do not like this Sam I am.\n")
}

#[test]
fn round_trips_all_byte_values() -> STDRESULT {
    let data: Vec<u8> = (0..=255u8).collect();
    round_trip(&data)
}

#[test]
fn decompressing_a_truncated_file_fails_non_zero() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = temp_dir.path().join("input.bin");
    let compressed_path = temp_dir.path().join("compressed.ah");
    let truncated_path = temp_dir.path().join("truncated.ah");
    let out_path = temp_dir.path().join("out.bin");
    std::fs::write(&in_path,b"the quick brown fox jumps over the lazy dog")?;

    Command::cargo_bin("adaptive-huffman")?
        .arg("compress")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&compressed_path)
        .assert()
        .success();

    let mut compressed = std::fs::read(&compressed_path)?;
    compressed.pop();
    std::fs::write(&truncated_path,&compressed)?;

    Command::cargo_bin("adaptive-huffman")?
        .arg("decompress")
        .arg("-i").arg(&truncated_path)
        .arg("-o").arg(&out_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("end of stream"));
    Ok(())
}

#[test]
fn missing_arguments_print_usage_and_fail() -> STDRESULT {
    Command::cargo_bin("adaptive-huffman")?
        .arg("compress")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
    Ok(())
}
