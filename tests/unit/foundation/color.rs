use super::*;

#[test]
fn parses_rrggbb_with_and_without_hash() {
    let c: Color = "#ff6b6b".parse().unwrap();
    assert_eq!(c, Color::rgb(0xff, 0x6b, 0x6b));

    let c: Color = "25E2CC".parse().unwrap();
    assert_eq!(c, Color::rgb(0x25, 0xe2, 0xcc));
}

#[test]
fn parses_rrggbbaa() {
    let c: Color = "#00000080".parse().unwrap();
    assert_eq!(
        c,
        Color {
            r: 0,
            g: 0,
            b: 0,
            a: 0x80
        }
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!("#fff".parse::<Color>().is_err());
    assert!("#gg6b6b".parse::<Color>().is_err());
    assert!("".parse::<Color>().is_err());
    assert!("not a color".parse::<Color>().is_err());
}

#[test]
fn display_round_trips() {
    for s in ["#ff6b6b", "#003d5b", "#00000080"] {
        let c: Color = s.parse().unwrap();
        assert_eq!(c.to_string(), s);
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }
}

#[test]
fn serde_uses_hex_strings() {
    let c: Color = "#ff8da1".parse().unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#ff8da1\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn premul_matches_rounded_multiply() {
    let c = Color {
        r: 100,
        g: 50,
        b: 200,
        a: 128,
    };
    assert_eq!(
        c.to_premul_array(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );

    let opaque = Color::rgb(1, 2, 3);
    assert_eq!(opaque.to_premul_array(), [1, 2, 3, 255]);
}
