//! End-to-end checks of the public generator API.

// ============================================================================
// Alphabet + generation
// ============================================================================

mod generation_tests {
    use rust_passgen::{
        build_alphabet, generate, AlphabetSpec, GeneratorError, PasswordGenerationOptions,
        PasswordGenerator, RandomSource, StrengthRating,
    };

    fn only_digits() -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: 4,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: true,
            include_symbols: false,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }

    #[test]
    fn test_pin_scenario() {
        let generated = PasswordGenerator::default()
            .generate_password(&only_digits())
            .unwrap();
        assert_eq!(generated.password.len(), 4);
        assert!(generated.password.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(generated.classes.len(), 1);
        assert_eq!(generated.strength, StrengthRating::Weak);
    }

    #[test]
    fn test_all_classes_sixteen_chars_is_very_strong() {
        let options = PasswordGenerationOptions {
            length: 16,
            ..PasswordGenerationOptions::default()
        };
        let generated = PasswordGenerator::default().generate_password(&options).unwrap();
        assert_eq!(generated.password.chars().count(), 16);
        assert_eq!(generated.strength, StrengthRating::VeryStrong);
    }

    #[test]
    fn test_every_character_comes_from_the_alphabet() {
        let spec = AlphabetSpec {
            exclude_similar: true,
            exclude_ambiguous: true,
            ..AlphabetSpec::default()
        };
        let alphabet = build_alphabet(spec).unwrap();
        let mut rng = RandomSource::Fast.rng();

        for _ in 0..200 {
            let password = generate(&alphabet, 24, &mut rng).unwrap();
            assert_eq!(password.chars().count(), 24);
            assert!(password.chars().all(|c| alphabet.contains(c)));
            assert!(!password.contains(['0', 'O', 'l', '1', 'I']));
        }
    }

    #[test]
    fn test_error_kinds() {
        let generator = PasswordGenerator::default();

        let no_classes = PasswordGenerationOptions {
            include_digits: false,
            ..only_digits()
        };
        assert_eq!(
            generator.generate_password(&no_classes),
            Err(GeneratorError::EmptyAlphabet)
        );

        let zero_length = PasswordGenerationOptions {
            length: 0,
            ..only_digits()
        };
        assert!(matches!(
            generator.generate_password(&zero_length),
            Err(GeneratorError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_generator_is_shareable_across_threads() {
        let generator = PasswordGenerator::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(move || {
                    generator
                        .generate_batch(&PasswordGenerationOptions::default(), 10)
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            let batch = handle.join().unwrap();
            assert_eq!(batch.len(), 10);
        }
    }
}

// ============================================================================
// Strength classification
// ============================================================================

mod strength_tests {
    use rust_passgen::{classes_in, classify_strength, CharClass, StrengthRating};
    use std::collections::BTreeSet;

    #[test]
    fn test_reference_ratings() {
        let cases = [
            (7, 3, StrengthRating::Weak),
            (10, 3, StrengthRating::Strong),
            (16, 4, StrengthRating::VeryStrong),
            (16, 1, StrengthRating::Weak),
            (4, 1, StrengthRating::Weak),
            (0, 0, StrengthRating::Weak),
        ];
        for (length, count, expected) in cases {
            assert_eq!(
                StrengthRating::from_parts(length, count),
                expected,
                "length={length} classes={count}"
            );
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classes: BTreeSet<CharClass> = CharClass::ALL.into_iter().take(3).collect();
        let first = classify_strength("abcdefghij", &classes);
        for _ in 0..10 {
            assert_eq!(classify_strength("abcdefghij", &classes), first);
        }
    }

    #[test]
    fn test_rating_an_existing_password() {
        let password = "VeryLongPasswordWith123AndSymbols!";
        assert_eq!(
            classify_strength(password, &classes_in(password)),
            StrengthRating::VeryStrong
        );
    }
}
