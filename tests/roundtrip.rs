//! エンコード・デコード・判定を組み合わせた性質のテスト

use rand::{Rng, SeedableRng, rngs::StdRng};
use textb64::{
    CodecError, FormatIssue, check_format, compute_stats, decode, encode, is_valid_base64,
    strip_whitespace, wrap_base64,
};

const SAMPLES: &[&str] = &[
    "Hello",
    "José",
    "€ 100",
    "José 🚀",
    "日本語のテキスト",
    "𝄞 music",
    "line1\nline2\r\n",
    "  leading and trailing  ",
    "a",
    "ab",
    "abc",
    "\u{FEFF}bom",
    "emoji 👨‍👩‍👧 family",
];

/// 乱数で作った任意のUnicode文字列（空白のみにはならない）
fn random_text(rng: &mut StdRng) -> String {
    let len = rng.random_range(1..48);
    let mut text: String = (0..len).map(|_| rng.random::<char>()).collect();
    if text.trim().is_empty() {
        text.push('x');
    }
    text
}

#[test]
fn test_known_scenarios() {
    assert_eq!(encode("Hello").unwrap(), "SGVsbG8=");
    assert_eq!(decode("SGVsbG8=").unwrap(), "Hello");

    let encoded = encode("José 🚀").unwrap();
    assert!(is_valid_base64(&encoded));
    assert_eq!(decode(&encoded).unwrap(), "José 🚀");
}

#[test]
fn test_samples_round_trip() {
    for text in SAMPLES {
        let encoded = encode(text).unwrap();
        assert!(is_valid_base64(&encoded), "not valid: {encoded}");
        assert_eq!(decode(&encoded).unwrap(), *text);
    }
}

#[test]
fn test_random_unicode_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x6236_3474);
    for _ in 0..500 {
        let text = random_text(&mut rng);
        let encoded = encode(&text).unwrap();
        assert!(is_valid_base64(&encoded));
        assert_eq!(decode(&encoded).unwrap(), text);
    }
}

#[test]
fn test_accepted_input_re_encodes_to_normalized_form() {
    let inputs = ["SGVs bG8=", "SGVs\nbG8h\n", " SA== ", "8J+a\tgA=="];
    for input in inputs {
        assert!(is_valid_base64(input));
        let text = decode(input).unwrap();
        assert_eq!(encode(&text).unwrap(), strip_whitespace(input));
    }
}

#[test]
fn test_decode_succeeds_exactly_when_valid() {
    // UTF-8として正しいバイト列になるものに限れば、判定とデコードは一致する
    let inputs = [
        "SGVsbG8=", "SGVsbG8", "SGVsbG8==", "SGk=", "SGl=", "SGVsb", "====", "S===", "SG=Vs",
        "not base64!", "SGVs bG8=",
    ];
    for input in inputs {
        assert_eq!(
            decode(input).is_ok(),
            is_valid_base64(input),
            "mismatch for {input:?}"
        );
    }
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(encode(""), Err(CodecError::Empty { .. })));
    assert!(matches!(encode("   "), Err(CodecError::Empty { .. })));
    assert!(matches!(decode(""), Err(CodecError::Empty { .. })));
    assert!(matches!(
        decode("not base64!"),
        Err(CodecError::InvalidFormat { .. })
    ));
    // 長さ・パディングの不整合も形式エラーとして理由付きで返す
    assert!(matches!(
        decode("SGVsbG8"),
        Err(CodecError::InvalidFormat {
            issue: FormatIssue::NotCanonical,
            ..
        })
    ));
    assert!(matches!(
        decode("SGVsbG8=="),
        Err(CodecError::InvalidFormat {
            issue: FormatIssue::NotCanonical,
            ..
        })
    ));
    assert!(matches!(decode("wg=="), Err(CodecError::Encoding(_))));

    assert!(!is_valid_base64(""));
    assert!(!is_valid_base64("not base64!"));
    assert!(!is_valid_base64("SGVsbG8"));
}

#[test]
fn test_wrapped_output_is_still_valid() {
    let mut rng = StdRng::seed_from_u64(76);
    for _ in 0..100 {
        let text = random_text(&mut rng);
        let width = rng.random_range(1..80);
        let wrapped = wrap_base64(&encode(&text).unwrap(), width);
        assert!(wrapped.lines().all(|line| line.len() <= width));
        assert_eq!(check_format(&wrapped).unwrap(), encode(&text).unwrap());
        assert_eq!(decode(&wrapped).unwrap(), text);
    }
}

#[test]
fn test_stats_of_both_sides() {
    let input = compute_stats("José");
    assert_eq!(
        (input.character_count, input.byte_count, input.line_count),
        (4, 5, 1)
    );

    // Base64はASCIIなので文字数とバイト数が一致する
    let output = compute_stats(&encode("José 🚀").unwrap());
    assert_eq!(output.character_count, output.byte_count);
    assert_eq!(output.byte_count % 4, 0);
}
