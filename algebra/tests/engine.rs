//! Engine initialization is process-wide, so this binary holds a single test.

use bls12381_algebra::{
    engine::{self, Config, DST_G1},
    Error, Point, G1, G2,
};

#[test]
fn test_custom_dst() {
    let config = Config {
        g1_dst: b"CUSTOM-G1-DST".to_vec(),
        g2_dst: b"CUSTOM-G2-DST".to_vec(),
    };
    engine::init(config.clone()).unwrap();
    assert_eq!(engine::config(), &config);

    // Hashing picks up the installed tags
    let message = b"message";
    assert_eq!(
        G1::hash(message),
        G1::map_with_dst(message, b"CUSTOM-G1-DST")
    );
    assert_eq!(
        G2::hash(message),
        G2::map_with_dst(message, b"CUSTOM-G2-DST")
    );
    assert_ne!(G1::hash(message), G1::map_with_dst(message, DST_G1));

    // The configuration cannot be replaced
    assert!(matches!(
        engine::init(Config::default()),
        Err(Error::AlreadyInitialized)
    ));
    assert_eq!(engine::config(), &config);
}
