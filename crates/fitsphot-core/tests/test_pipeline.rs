mod common;

use std::fs;

use ndarray::Array2;

use fitsphot_core::error::{ErrorKind, FitsPhotError};
use fitsphot_core::pipeline::{
    list_input_files, run_pipeline, run_pipeline_reported, FailurePolicy, FileOrdering,
    PipelineConfig, ProgressReporter,
};

use common::{build_fits_i16, image_with_squares, write_file, write_fits};

const HEADER_LINE: &str = "File_no.,File_name,Object_ID,X Coordinate,Y Coordinate,Size (pixels^2),Luminosity (pixel intensity * pixels)";

fn config_for(input: &std::path::Path, output: &std::path::Path) -> PipelineConfig {
    PipelineConfig {
        input_dir: input.to_path_buf(),
        output_path: output.to_path_buf(),
        ..Default::default()
    }
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HEADER_LINE));
    lines
        .map(|l| l.split(',').map(str::to_string).collect())
        .collect()
}

#[test]
fn test_empty_directory_writes_header_only() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("result.csv");

    let summary = run_pipeline(&config_for(input.path(), &output)).unwrap();
    assert_eq!(summary.files_processed, 0);
    assert_eq!(summary.objects, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), format!("{HEADER_LINE}\n"));
}

#[test]
fn test_two_blobs_in_one_file() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("result.csv");
    write_fits(
        input.path(),
        "pair.fits",
        &image_with_squares(24, 24, &[(2, 3, 2, 80.0), (12, 12, 3, 80.0)]),
    );

    let summary = run_pipeline(&config_for(input.path(), &output)).unwrap();
    assert_eq!(summary.objects, 2);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][..3], ["1", "pair.fits", "1"]);
    assert_eq!(rows[0][5], "4");
    assert_eq!(rows[1][..3], ["1", "pair.fits", "2"]);
    assert_eq!(rows[1][5], "9");
}

#[test]
fn test_files_numbered_by_name() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("result.csv");
    write_fits(input.path(), "b.fits", &image_with_squares(10, 10, &[(1, 1, 2, 5.0)]));
    write_fits(input.path(), "a.fits", &image_with_squares(10, 10, &[(5, 5, 3, 5.0)]));

    run_pipeline(&config_for(input.path(), &output)).unwrap();

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][..2], ["1", "a.fits"]);
    assert_eq!(rows[0][5], "9");
    assert_eq!(rows[1][..2], ["2", "b.fits"]);
    assert_eq!(rows[1][5], "4");
}

#[test]
fn test_rerun_is_byte_identical() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    for (i, name) in ["m1.fits", "m2.fits", "m3.fits"].iter().enumerate() {
        let data = Array2::from_shape_fn((32, 32), |(r, c)| {
            let d = (r as f64 - 10.0 - i as f64).powi(2) + (c as f64 - 16.0).powi(2);
            1000.0 * (-d / 8.0).exp() + ((r * 7 + c * 3) % 5) as f64
        });
        write_fits(input.path(), name, &data);
    }

    let first = out.path().join("first.csv");
    let second = out.path().join("second.csv");
    run_pipeline(&config_for(input.path(), &first)).unwrap();
    run_pipeline(&config_for(input.path(), &second)).unwrap();

    let a = fs::read(&first).unwrap();
    let b = fs::read(&second).unwrap();
    assert!(a.len() > HEADER_LINE.len() + 1);
    assert_eq!(a, b);
}

#[test]
fn test_non_fits_entries_ignored() {
    let input = tempfile::tempdir().unwrap();
    write_fits(input.path(), "real.fits", &image_with_squares(8, 8, &[(2, 2, 2, 1.0)]));
    write_file(input.path(), "notes.txt", b"not an image");
    write_file(input.path(), "archive.fits.gz", b"compressed");
    write_file(input.path(), "upper.FITS", b"wrong case");
    fs::create_dir(input.path().join("folder.fits")).unwrap();

    let files = list_input_files(input.path(), FileOrdering::Name).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].index, 1);
    assert_eq!(files[0].name, "real.fits");
}

#[test]
fn test_listing_order_finds_same_files() {
    let input = tempfile::tempdir().unwrap();
    for name in ["c.fits", "a.fits", "b.fits"] {
        write_fits(input.path(), name, &image_with_squares(4, 4, &[(1, 1, 1, 1.0)]));
    }

    let listed = list_input_files(input.path(), FileOrdering::Listing).unwrap();
    let mut names: Vec<_> = listed.iter().map(|f| f.name.clone()).collect();
    names.sort();
    assert_eq!(names, ["a.fits", "b.fits", "c.fits"]);
    let indices: Vec<_> = listed.iter().map(|f| f.index).collect();
    assert_eq!(indices, [1, 2, 3]);
}

#[test]
fn test_abort_on_bad_file_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("result.csv");
    write_fits(input.path(), "a.fits", &image_with_squares(8, 8, &[(2, 2, 2, 1.0)]));
    write_fits(input.path(), "b.fits", &Array2::from_elem((8, 8), 3.0));

    let err = run_pipeline(&config_for(input.path(), &output)).unwrap_err();
    assert!(matches!(err, FitsPhotError::UniformImage(_)), "got: {err}");
    assert!(!output.exists());
}

#[test]
fn test_abort_on_unreadable_file() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("result.csv");
    write_file(input.path(), "broken.fits", b"SIMPLE");

    let err = run_pipeline(&config_for(input.path(), &output)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Load);
    assert!(!output.exists());
}

#[test]
fn test_skip_policy_keeps_file_numbering() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("result.csv");
    write_fits(input.path(), "a.fits", &image_with_squares(8, 8, &[(2, 2, 2, 1.0)]));
    write_fits(input.path(), "b.fits", &Array2::from_elem((8, 8), 3.0));
    write_fits(input.path(), "c.fits", &image_with_squares(8, 8, &[(4, 4, 3, 1.0)]));

    let config = PipelineConfig {
        on_error: FailurePolicy::Skip,
        ..config_for(input.path(), &output)
    };
    let summary = run_pipeline(&config).unwrap();
    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.files_skipped, 1);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][..2], ["1", "a.fits"]);
    assert_eq!(rows[1][..2], ["3", "c.fits"]);
}

#[test]
fn test_missing_input_directory() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("nowhere");
    let err = run_pipeline(&config_for(&missing, &out.path().join("r.csv"))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Load);
}

#[derive(Default)]
struct RecordingReporter {
    events: std::cell::RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn begin_run(&self, total_files: usize) {
        self.events.borrow_mut().push(format!("run {total_files}"));
    }

    fn begin_file(&self, index: usize, name: &str) {
        self.events.borrow_mut().push(format!("begin {index} {name}"));
    }

    fn finish_file(&self, index: usize, objects: usize) {
        self.events.borrow_mut().push(format!("finish {index} {objects}"));
    }

    fn skip_file(&self, index: usize, _name: &str, _error: &FitsPhotError) {
        self.events.borrow_mut().push(format!("skip {index}"));
    }
}

#[test]
fn test_reporter_sees_each_file() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_fits(input.path(), "a.fits", &image_with_squares(8, 8, &[(1, 1, 2, 1.0), (5, 5, 2, 1.0)]));
    write_file(input.path(), "b.fits", b"junk");

    let reporter = RecordingReporter::default();
    let config = PipelineConfig {
        on_error: FailurePolicy::Skip,
        ..config_for(input.path(), &out.path().join("r.csv"))
    };
    run_pipeline_reported(&config, &reporter).unwrap();

    assert_eq!(
        reporter.events.into_inner(),
        ["run 2", "begin 1 a.fits", "finish 1 2", "begin 2 b.fits", "skip 2"]
    );
}

#[test]
fn test_output_path_directory_rejected_before_processing() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_file(input.path(), "broken.fits", b"junk");

    let err = run_pipeline(&config_for(input.path(), out.path())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_integer_file_thresholded_on_exact_levels() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("result.csv");

    let mut data = Array2::<i16>::zeros((25, 25));
    for row in 5..15 {
        for col in 5..15 {
            data[[row, col]] = 3;
        }
    }
    data[[20, 20]] = 1000;
    write_file(input.path(), "hot.fits", &build_fits_i16(&data, &[]));

    let summary = run_pipeline(&config_for(input.path(), &output)).unwrap();
    assert_eq!(summary.objects, 1);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][3..], ["20.0", "20.0", "1", "1000.0"]);
}
