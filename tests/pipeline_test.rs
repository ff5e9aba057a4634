// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/pipeline_test.rs
// Version: 1.0.0
//
// This file checks the double Keccak-256 pipeline against the sha3 crate and
// makes sure it is not accidentally using standard SHA3 padding.
//
// Tree Location:
// - tests/pipeline_test.rs (digest pipeline tests)
// - Depends on: sha3run, sha3

#[cfg(test)]
mod tests {
    use sha3::{Digest, Keccak256, Sha3_256};
    use sha3run::core::{DigestPipeline, HashMode, hash, pipeline};

    #[test]
    fn test_pipeline_is_double_keccak() {
        let input = b"AAAAA";
        let first = Keccak256::digest(input);
        let second = Keccak256::digest(first);

        assert_eq!(pipeline(input).as_slice(), second.as_slice());
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        for input in [&b" "[..], b"hello", b"~~~~~", b"AAAAA"] {
            assert_eq!(pipeline(input), pipeline(input));
        }
    }

    #[test]
    fn test_pipeline_differs_from_sha3() {
        let input = b"AAAAA";
        let sha3 = Sha3_256::digest(Sha3_256::digest(input));
        assert_ne!(pipeline(input).as_slice(), sha3.as_slice());

        let standard = DigestPipeline::new(256, HashMode::Standard).unwrap();
        assert_eq!(standard.digest(input).as_slice(), sha3.as_slice());
    }

    #[test]
    fn test_hash_primitive_rejects_unsupported_size() {
        assert!(hash(b"abc", 128, HashMode::Keccak).is_err());
        assert!(DigestPipeline::new(384, HashMode::Keccak).is_err());
    }

    #[test]
    fn test_keccak_known_vector() {
        let digest = hash(b"abc", 256, HashMode::Keccak).unwrap();
        assert_eq!(
            hex::encode(digest),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }
}
