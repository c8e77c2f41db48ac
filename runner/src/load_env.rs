use anyhow::Context;
use solana_sdk::{
    bs58,
    signature::Keypair,
};

pub const PAYER_SECRET_KEY_VAR: &str = "XBASIC_PAYER_SECRET_KEY";

/// The payer keypair from [`PAYER_SECRET_KEY_VAR`], if it's set.
pub fn payer_keypair() -> anyhow::Result<Option<Keypair>> {
    match std::env::var(PAYER_SECRET_KEY_VAR) {
        Ok(kp_str) => parse_keypair(&kp_str)
            .with_context(|| format!("Invalid {PAYER_SECRET_KEY_VAR}"))
            .map(Some),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).context(PAYER_SECRET_KEY_VAR),
    }
}

/// Parses a secret key given either as a JSON byte array (the `solana-keygen` file format) or as
/// a base58 string.
pub fn parse_keypair(kp_str: &str) -> anyhow::Result<Keypair> {
    let kp_str = kp_str.trim();
    let byte_vec: Vec<u8> = if kp_str.starts_with('[') {
        serde_json::from_str(kp_str).context("Invalid JSON keypair")?
    } else {
        bs58::decode(kp_str)
            .into_vec()
            .context("Invalid base58 keypair")?
    };

    Keypair::try_from(byte_vec.as_slice()).context("Invalid keypair bytes")
}

#[cfg(test)]
mod tests {
    use solana_sdk::signer::Signer;

    use super::*;

    #[test]
    fn parses_json_and_base58() {
        let keypair = Keypair::new();
        let bytes = keypair.to_bytes();

        let json = serde_json::to_string(&bytes.to_vec()).unwrap();
        let from_json = parse_keypair(&json).unwrap();
        assert_eq!(from_json.pubkey(), keypair.pubkey());

        let base58 = bs58::encode(bytes).into_string();
        let from_base58 = parse_keypair(&format!("  {base58}\n")).unwrap();
        assert_eq!(from_base58.pubkey(), keypair.pubkey());
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(parse_keypair("[1, 2, 3]").is_err());
        assert!(parse_keypair("[1, 2,").is_err());
        assert!(parse_keypair("not-base58-0OIl").is_err());
        assert!(parse_keypair("").is_err());
    }
}
