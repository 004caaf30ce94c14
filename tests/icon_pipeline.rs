use arcmark::{ICNS_MAGIC, IconType, PNG_SIGNATURE, build_icon_family, compose_logo, encode_png};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn png_round_trips_through_a_standard_decoder() {
    init_tracing();
    let canvas = compose_logo(64).unwrap();
    let png = encode_png(&canvas).unwrap();

    let decoded = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
        .expect("standard decoder rejected our PNG");
    let rgba = decoded.to_rgba8();

    assert_eq!(rgba.width(), 64);
    assert_eq!(rgba.height(), 64);
    assert_eq!(rgba.as_raw().as_slice(), canvas.pixels());
}

#[test]
fn encoded_streams_are_deterministic() {
    let a = encode_png(&compose_logo(256).unwrap()).unwrap();
    let b = encode_png(&compose_logo(256).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn icon_family_walks_clean_and_every_element_decodes() {
    init_tracing();
    let family = build_icon_family().unwrap();

    assert_eq!(&family[..4], ICNS_MAGIC);
    let total = u32::from_be_bytes(family[4..8].try_into().unwrap()) as usize;
    assert_eq!(total, family.len());

    let mut at = 8;
    let mut seen = Vec::new();
    while at < family.len() {
        let tag: [u8; 4] = family[at..at + 4].try_into().unwrap();
        let len = u32::from_be_bytes(family[at + 4..at + 8].try_into().unwrap()) as usize;
        assert!(len >= 8, "element shorter than its own header");
        let png = &family[at + 8..at + len];
        assert_eq!(&png[..8], PNG_SIGNATURE);

        let kind = IconType::ALL
            .into_iter()
            .find(|t| t.os_type() == tag)
            .unwrap_or_else(|| panic!("unknown element tag {tag:?}"));
        let decoded = image::load_from_memory_with_format(png, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.width(), kind.pixel_size());
        assert_eq!(decoded.height(), kind.pixel_size());

        seen.push(kind);
        at += len;
    }
    assert_eq!(at, family.len());
    assert_eq!(seen, IconType::ALL);
}
