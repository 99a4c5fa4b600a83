//! Byte-level tests of the assembled image regions

mod common;

use common::{build_image, test_rng, FailingSink, TrickleSource};
use fat12::{create_image, Fat12Error, InputFile, ShortName, SECTOR_SIZE};
use rand::RngCore;

#[test]
fn empty_input_yields_minimal_volume() {
    let image = build_image(&[], None).unwrap();
    assert_eq!(image.len(), 3 * SECTOR_SIZE);

    // boot sector: 16 root entries, 3 total sectors, default label
    assert_eq!(u16::from_le_bytes([image[17], image[18]]), 16);
    assert_eq!(u16::from_le_bytes([image[19], image[20]]), 3);
    assert_eq!(&image[43..54], b"NO NAME    ");
    assert_eq!(&image[510..512], &[0x55, 0xAA]);

    // FAT: media marker and the root-directory placeholder entry
    assert_eq!(&image[512..515], &[0xF8, 0xFF, 0xFF]);
    assert!(image[515..1024].iter().all(|&b| b == 0));

    // root directory sector is present and empty
    assert!(image[1024..1536].iter().all(|&b| b == 0));
}

#[test]
fn single_file_scenario_layout() {
    let image = build_image(&[("a.txt", b"0123456789")], Some("TESTLABEL")).unwrap();
    assert_eq!(image.len(), 4 * SECTOR_SIZE);

    // boot sector counts and the space-padded label
    assert_eq!(u16::from_le_bytes([image[17], image[18]]), 16);
    assert_eq!(u16::from_le_bytes([image[19], image[20]]), 4);
    assert_eq!(&image[43..54], b"TESTLABEL  ");

    // FAT entries: marker, root placeholder, file end-of-chain, then the
    // flush-completing zero entry
    assert_eq!(&image[512..518], &[0xF8, 0xFF, 0xFF, 0xFF, 0x0F, 0x00]);
    assert!(image[518..1024].iter().all(|&b| b == 0));

    // one long-name record
    let short = ShortName::derive("a.txt");
    let lfn = &image[1024..1056];
    assert_eq!(lfn[0], 0x41);
    assert_eq!(&lfn[1..11], &[0x61, 0, 0x2E, 0, 0x74, 0, 0x78, 0, 0x74, 0]);
    assert_eq!(lfn[11], 0x0F);
    assert_eq!(lfn[13], short.checksum());
    assert_eq!(&lfn[14..16], &[0x00, 0x00]);
    assert_eq!(&lfn[16..26], &[0xFF; 10]);
    assert_eq!(&lfn[26..28], &[0x00, 0x00]);
    assert_eq!(&lfn[28..32], &[0xFF; 4]);

    // one short record: derived name, archive attribute, epoch dates,
    // first cluster 2, size 10
    let entry = &image[1056..1088];
    assert_eq!(&entry[0..11], short.as_bytes());
    assert_eq!(entry[11], 0x20);
    assert_eq!(u16::from_le_bytes([entry[16], entry[17]]), 0x0021);
    assert_eq!(u16::from_le_bytes([entry[18], entry[19]]), 0x0021);
    assert_eq!(u16::from_le_bytes([entry[24], entry[25]]), 0x0021);
    assert_eq!(u16::from_le_bytes([entry[26], entry[27]]), 2);
    assert_eq!(u32::from_le_bytes([entry[28], entry[29], entry[30], entry[31]]), 10);

    // fourteen spare entries stay zeroed
    assert!(image[1088..1536].iter().all(|&b| b == 0));

    // data sector: content then zero fill
    assert_eq!(&image[1536..1546], b"0123456789");
    assert!(image[1546..2048].iter().all(|&b| b == 0));
}

#[test]
fn multi_file_chains_and_clusters() {
    let big = vec![0xA5u8; 700];
    let image = build_image(&[("big.bin", &big), ("tiny", b"xyz")], None).unwrap();
    // boot + FAT + root dir + 2 + 1 data sectors
    assert_eq!(image.len(), 6 * SECTOR_SIZE);

    // FAT: marker, root placeholder, chain 2 -> 3 -> EOC, then EOC for
    // the second file
    assert_eq!(
        &image[512..521],
        &[0xF8, 0xFF, 0xFF, 0x03, 0xF0, 0xFF, 0xFF, 0x0F, 0x00]
    );

    // first cluster fields: 2 for the first file, 4 for the second
    let first = &image[1024 + 32..1024 + 64];
    assert_eq!(u16::from_le_bytes([first[26], first[27]]), 2);
    assert_eq!(
        u32::from_le_bytes([first[28], first[29], first[30], first[31]]),
        700
    );
    let second = &image[1024 + 96..1024 + 128];
    assert_eq!(u16::from_le_bytes([second[26], second[27]]), 4);

    // data regions are individually padded
    assert_eq!(&image[1536..2236], &big[..]);
    assert!(image[2236..2560].iter().all(|&b| b == 0));
    assert_eq!(&image[2560..2563], b"xyz");
    assert!(image[2563..3072].iter().all(|&b| b == 0));
}

#[test]
fn zero_byte_file_gets_entry_but_no_data() {
    let image = build_image(&[("empty.dat", b"")], None).unwrap();
    assert_eq!(image.len(), 3 * SECTOR_SIZE);

    // the file still terminates a (zero-length) chain in the FAT
    assert_eq!(&image[512..518], &[0xF8, 0xFF, 0xFF, 0xFF, 0x0F, 0x00]);

    // short record reports size zero
    let entry = &image[1024 + 32..1024 + 64];
    assert_eq!(u16::from_le_bytes([entry[26], entry[27]]), 2);
    assert_eq!(u32::from_le_bytes([entry[28], entry[29], entry[30], entry[31]]), 0);
}

#[test]
fn output_length_is_always_a_sector_multiple() {
    let one = vec![1u8; 1];
    let just_under = vec![2u8; 511];
    let exact = vec![3u8; 512];
    let just_over = vec![4u8; 513];
    let cases: &[&[(&str, &[u8])]] = &[
        &[],
        &[("a", &one)],
        &[("b", &just_under)],
        &[("c", &exact)],
        &[("d", &just_over)],
        &[("a", &one), ("d", &just_over), ("c", &exact)],
    ];
    for files in cases {
        let image = build_image(files, None).unwrap();
        assert!(!image.is_empty());
        assert_eq!(image.len() % SECTOR_SIZE, 0);
    }
}

#[test]
fn capacity_limit_is_341_data_sectors() {
    let at_limit = vec![0u8; 341 * SECTOR_SIZE];
    let image = build_image(&[("huge.bin", &at_limit)], None).unwrap();
    assert_eq!(image.len() % SECTOR_SIZE, 0);

    let over = vec![0u8; 341 * SECTOR_SIZE + 1];
    assert_eq!(
        build_image(&[("huge.bin", &over)], None),
        Err(Fat12Error::CapacityExceeded)
    );
}

#[test]
fn validation_fails_before_any_output() {
    let mut src: &[u8] = b"data";
    let mut files = [InputFile {
        name: "a.txt",
        size: 4,
        source: &mut src,
    }];
    let mut out = Vec::new();
    let err = create_image(&mut files, Some("TWELVE CHARS"), &mut test_rng(), &mut out);
    assert_eq!(err, Err(Fat12Error::LabelTooLong));
    assert!(out.is_empty());
}

#[test]
fn oversized_stream_is_rejected() {
    let mut src: &[u8] = b"0123456789";
    let mut files = [InputFile {
        name: "a.txt",
        size: 5,
        source: &mut src,
    }];
    let mut out = Vec::new();
    let err = create_image(&mut files, None, &mut test_rng(), &mut out);
    assert_eq!(err, Err(Fat12Error::SizeMismatch));
}

#[test]
fn truncated_stream_is_an_io_failure() {
    let mut src: &[u8] = b"0123456789";
    let mut files = [InputFile {
        name: "a.txt",
        size: 20,
        source: &mut src,
    }];
    let mut out = Vec::new();
    let err = create_image(&mut files, None, &mut test_rng(), &mut out);
    assert_eq!(err, Err(Fat12Error::IoError));
}

#[test]
fn sink_failure_aborts_the_run() {
    let mut src: &[u8] = b"payload";
    let mut files = [InputFile {
        name: "a.txt",
        size: 7,
        source: &mut src,
    }];
    let mut sink = FailingSink {
        written: 0,
        fail_after: 600,
    };
    let err = create_image(&mut files, None, &mut test_rng(), &mut sink);
    assert_eq!(err, Err(Fat12Error::IoError));
}

#[test]
fn short_reads_are_drained_completely() {
    let content: Vec<u8> = (0..=255u8).cycle().take(700).collect();
    let mut source = TrickleSource(&content);
    let mut files = [InputFile {
        name: "slow.bin",
        size: 700,
        source: &mut source,
    }];
    let mut image = Vec::new();
    create_image(&mut files, None, &mut test_rng(), &mut image).unwrap();
    assert_eq!(&image[1536..2236], &content[..]);
}

#[test]
fn same_seed_same_image() {
    let a = build_image(&[("a.txt", b"0123456789")], Some("TESTLABEL")).unwrap();
    let b = build_image(&[("a.txt", b"0123456789")], Some("TESTLABEL")).unwrap();
    assert_eq!(a, b);

    // the volume ID is exactly the injected random bytes
    let mut expected = [0u8; 4];
    test_rng().fill_bytes(&mut expected);
    assert_eq!(&a[39..43], &expected);
}
