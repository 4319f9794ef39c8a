use super::*;

fn tiny_strip() -> StripRgba {
    StripRgba {
        width: 2,
        height: 2,
        data: vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ],
    }
}

#[test]
fn png_round_trips_losslessly() {
    let strip = tiny_strip();
    let png = encode_png(&strip).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 2));
    assert_eq!(decoded.into_raw(), strip.data);
}

#[test]
fn encoding_is_reproducible() {
    let strip = tiny_strip();
    assert_eq!(encode_png(&strip).unwrap(), encode_png(&strip).unwrap());
}

#[test]
fn byte_length_mismatch_is_an_encode_error() {
    let strip = StripRgba {
        width: 10,
        height: 10,
        data: vec![0; 12],
    };
    let err = encode_png(&strip).unwrap_err();
    assert!(matches!(err, FourcutError::Encode(_)));
}

#[test]
fn download_file_name_uses_iso_date() {
    let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
    assert_eq!(download_file_name("포토부스", date), "포토부스_2025-03-09.png");
    assert_eq!(download_file_name("fourcut", date), "fourcut_2025-03-09.png");
}
