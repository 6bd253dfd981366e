use fuzzy_extractor::FuzzyExtractor;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn byte_extractor_identity_repeated() {
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let fe = FuzzyExtractor::<u8>::new_default(16, 8);
    for _ in 0..100 {
        let (key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
        let key2 = fe.rep("00112233445566778899aabbccddeeff", &helper).unwrap();
        assert_eq!(key, key2);
    }
}

#[test]
fn byte_extractor_tolerates_noise_repeated() {
    let mut rng = ChaCha8Rng::seed_from_u64(456);
    let fe = FuzzyExtractor::<u8>::new_default(16, 8);
    for _ in 0..100 {
        let (key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
        // Differs by two nibbles, i.e. at most 8 bit positions (spec S3).
        let key2 = fe.rep("00112223445566778899abbbccddeeff", &helper).unwrap();
        assert_eq!(key, key2);
    }
}

#[test]
fn word_extractor_identity_repeated() {
    let mut rng = ChaCha8Rng::seed_from_u64(789);
    let fe = FuzzyExtractor::<u32>::new_default(4, 2);
    for _ in 0..100 {
        let (key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
        let key2 = fe.rep("00112233445566778899aabbccddeeff", &helper).unwrap();
        assert_eq!(key, key2);
    }
}

#[test]
fn word_extractor_tolerates_noise_repeated() {
    let mut rng = ChaCha8Rng::seed_from_u64(101112);
    let fe = FuzzyExtractor::<u32>::new_default(4, 2);
    for _ in 0..100 {
        let (key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
        let key2 = fe.rep("00112223445566778899abbbccddeeff", &helper).unwrap();
        assert_eq!(key, key2);
    }
}

#[test]
fn helper_data_is_reusable_across_many_rep_calls() {
    let mut rng = ChaCha8Rng::seed_from_u64(222);
    let fe = FuzzyExtractor::<u8>::new_default(16, 8);
    let (key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
    for _ in 0..10 {
        assert_eq!(fe.rep("00112233445566778899aabbccddeeff", &helper).unwrap(), key);
    }
}

#[test]
fn explicit_parameters_match_defaults() {
    let mut rng = ChaCha8Rng::seed_from_u64(333);
    let explicit = FuzzyExtractor::<u8>::new(16, 8, 0.001, 2, 16);
    let default = FuzzyExtractor::<u8>::new_default(16, 8);
    assert_eq!(explicit.num_helpers(), default.num_helpers());

    let (key, helper) = explicit.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
    let key2 = default.rep("00112233445566778899aabbccddeeff", &helper).unwrap();
    assert_eq!(key, key2);
}
