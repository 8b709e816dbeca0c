mod common;

use std::fs;
use std::io::Cursor;

use fitconv_rs::image_pipeline::{
    ConversionConfig, ConversionError, FitsConversionPipeline, OutputKind, default_output_path,
};
use tempfile::tempdir;
use tiff::decoder::{Decoder, DecodingResult};

#[test]
fn rgb_planes_convert_to_interleaved_tiff() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("m31.fit");
    let output = default_output_path(&input, OutputKind::Uncompressed);
    common::write_file(
        &input,
        &common::fits_u16(3, 2, &[vec![10; 6], vec![20; 6], vec![30; 6]]),
    );

    FitsConversionPipeline::new(ConversionConfig::default())
        .convert_file(&input, &output)
        .unwrap();

    let mut decoder = Decoder::new(Cursor::new(fs::read(&output).unwrap())).unwrap();
    assert_eq!(decoder.dimensions().unwrap(), (3, 2));
    match decoder.read_image().unwrap() {
        DecodingResult::U16(values) => assert_eq!(values, [10u16, 20, 30].repeat(6)),
        _ => panic!("expected 16-bit samples"),
    }
}

#[test]
fn mono_mosaic_debayers_to_rgb_png() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("flat.fit");
    let output = default_output_path(&input, OutputKind::LosslessCompressed);
    let mut bytes = common::header(16, 4, 4, None);
    bytes.extend(std::iter::repeat_n(0x8000u16.to_le_bytes(), 16).flatten());
    common::write_file(&input, &bytes);

    let config = ConversionConfig::builder()
        .output_kind(OutputKind::LosslessCompressed)
        .demosaic(true)
        .build();
    FitsConversionPipeline::new(config)
        .convert_file(&input, &output)
        .unwrap();

    let decoded = image::open(&output).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (4, 4));
    assert!(decoded.into_raw().iter().all(|&v| v == 0x80));
}

#[test]
fn jpeg_output_is_written() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("moon.fits");
    let output = dir.path().join("moon-preview.jpg");
    common::write_file(&input, &common::fits_u16(8, 8, &[vec![0x4000; 64]]));

    let config = ConversionConfig::builder()
        .output_kind(OutputKind::LossyCompressed)
        .jpeg_quality(90)
        .build();
    let timings = FitsConversionPipeline::new(config)
        .convert_file_with_timings(&input, &output)
        .unwrap();

    let written = fs::read(&output).unwrap();
    assert_eq!(&written[..2], &[0xFF, 0xD8]);
    assert!(timings.get_step("encode").is_some());
    assert!(timings.get_step("reduce_depth").is_some());
}

#[test]
fn missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let result = FitsConversionPipeline::new(ConversionConfig::default())
        .convert_file(dir.path().join("absent.fit"), dir.path().join("absent.tif"));
    assert!(matches!(result, Err(ConversionError::InputReadError(_))));
}

#[test]
fn output_may_not_overwrite_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("same.tif");
    common::write_file(&input, &common::fits_u16(1, 1, &[vec![1]]));

    let result = FitsConversionPipeline::new(ConversionConfig::default()).convert_file(&input, &input);

    assert!(matches!(result, Err(ConversionError::OutputWriteError(_))));
    assert_eq!(fs::read(&input).unwrap().len(), 2882);
}

#[test]
fn invalid_header_values_are_distinct_errors() {
    let dir = tempdir().unwrap();
    let cases: Vec<(Vec<u8>, fn(&ConversionError) -> bool)> = vec![
        (common::header(16, 0, 4, None), |e| matches!(e, ConversionError::InvalidWidth(0))),
        (common::header(16, 4, 100000, None), |e| {
            matches!(e, ConversionError::InvalidHeight(100000))
        }),
        (common::header(16, 4, 4, Some(2)), |e| {
            matches!(e, ConversionError::InvalidChannelCount(2))
        }),
        (common::header(12, 4, 4, None), |e| {
            matches!(e, ConversionError::UnsupportedDepthError { bit_depth: 12, .. })
        }),
    ];

    for (i, (bytes, expected)) in cases.into_iter().enumerate() {
        let input = dir.path().join(format!("bad{}.fit", i));
        let output = dir.path().join(format!("bad{}.tif", i));
        common::write_file(&input, &bytes);
        let err = FitsConversionPipeline::new(ConversionConfig::default())
            .convert_file(&input, &output)
            .unwrap_err();
        assert!(expected(&err), "case {}: {}", i, err);
        assert!(!output.exists(), "case {} left an output file", i);
    }
}

#[test]
fn header_without_end_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.fit");
    let mut bytes = common::header(16, 2, 2, None);
    bytes.truncate(160);
    common::write_file(&input, &bytes);

    let result = FitsConversionPipeline::new(ConversionConfig::default())
        .convert_file(&input, dir.path().join("broken.tif"));

    assert!(matches!(result, Err(ConversionError::HeaderReadError(_))));
}

#[test]
fn output_aliasing_input_through_parent_dir_is_refused() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let input = dir.path().join("m42.fit");
    let original = common::fits_u16(1, 1, &[vec![1]]);
    common::write_file(&input, &original);

    let alias = dir.path().join("sub").join("..").join("m42.fit");
    let result = FitsConversionPipeline::new(ConversionConfig::default()).convert_file(&input, &alias);

    assert!(matches!(result, Err(ConversionError::OutputWriteError(_))));
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[cfg(unix)]
#[test]
fn output_symlinked_to_input_is_refused() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("m42.fit");
    let original = common::fits_u16(1, 1, &[vec![1]]);
    common::write_file(&input, &original);
    let link = dir.path().join("m42.tif");
    std::os::unix::fs::symlink(&input, &link).unwrap();

    let result = FitsConversionPipeline::new(ConversionConfig::default()).convert_file(&input, &link);

    assert!(matches!(result, Err(ConversionError::OutputWriteError(_))));
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn failed_conversion_leaves_no_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("short.fit");
    let mut bytes = common::fits_u16(4, 4, &[vec![0; 16]]);
    bytes.truncate(bytes.len() - 3);
    common::write_file(&input, &bytes);
    let output = dir.path().join("short.tif");

    let result = FitsConversionPipeline::new(ConversionConfig::default()).convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::PayloadTruncatedError { .. })));
    assert!(!output.exists());
}

#[test]
fn file_timings_end_with_the_output_write() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("flat.fit");
    common::write_file(&input, &common::fits_u16(2, 2, &[vec![7; 4]]));

    let timings = FitsConversionPipeline::new(ConversionConfig::default())
        .convert_file_with_timings(&input, dir.path().join("flat.tif"))
        .unwrap();

    let names: Vec<&str> = timings.steps().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names.first(), Some(&"open_input_file"));
    assert_eq!(names.last(), Some(&"write_output_file"));
}
