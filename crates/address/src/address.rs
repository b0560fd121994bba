use filaddr_core::hashes::blake2b160;
use k256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey};

use crate::{
    enc,
    network::{Network, NetworkAddress},
    payload::Payload,
    protocol::Protocol,
    AddressError, AddressResult,
};

/// Address is the struct that defines the protocol and data payload conversion from either
/// a public key or value. The default value is `Address::UNDEF`.
///
/// Addresses compare by protocol and payload. The network an address was rendered with or
/// parsed from is not part of the value.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address {
    payload: Option<Payload>,
}

impl Address {
    /// The undefined address. It has no protocol and an empty binary form, and is equal only to
    /// itself.
    pub const UNDEF: Address = Address { payload: None };

    /// Wrap a payload in an address
    pub const fn from_payload(payload: Payload) -> Self {
        Self {
            payload: Some(payload),
        }
    }

    /// Generates a new ID address from an actor ID.
    pub const fn new_id(id: u64) -> Self {
        Self::from_payload(Payload::ID(id))
    }

    /// Generates a new secp256k1 address from a public key. The payload is the blake2b160 digest
    /// of the uncompressed SEC1 point.
    pub fn new_secp256k1(key: &PublicKey) -> Self {
        let uncompressed = key.to_encoded_point(false);
        Self::from_payload(Payload::Secp256k1(
            blake2b160(uncompressed.as_bytes()).to_array(),
        ))
    }

    /// Generates a new secp256k1 address from a SEC1-encoded public key, compressed or
    /// uncompressed.
    pub fn new_secp256k1_sec1(key: &[u8]) -> AddressResult<Self> {
        let key = PublicKey::from_sec1_bytes(key)?;
        Ok(Self::new_secp256k1(&key))
    }

    /// Generates a new actor address from a 20-byte digest computed by the caller.
    pub fn new_actor(data: &[u8]) -> AddressResult<Self> {
        Payload::new(Protocol::Actor, data).map(Self::from_payload)
    }

    /// Generates a new BLS address from the 48 bytes of a serialized BLS public key.
    pub fn new_bls(key: &[u8]) -> AddressResult<Self> {
        Payload::new(Protocol::BLS, key).map(Self::from_payload)
    }

    /// Generates a new BLS address from a G1 public key.
    #[cfg(feature = "bls")]
    pub fn new_bls_key(key: &bls12_381::G1Affine) -> Self {
        Self::from_payload(Payload::BLS(key.to_compressed()))
    }

    /// Bind a rendering network to this address.
    pub fn with_network(self, network: Network) -> NetworkAddress {
        NetworkAddress::new(network, self)
    }

    /// Return the payload, if the address is defined
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Return the protocol, if the address is defined
    pub fn protocol(&self) -> Option<Protocol> {
        self.payload.as_ref().map(Payload::protocol)
    }

    /// Return the actor ID of an ID address
    pub fn id(&self) -> Option<u64> {
        match self.payload {
            Some(Payload::ID(id)) => Some(id),
            _ => None,
        }
    }

    /// True if this is `Address::UNDEF`
    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }

    /// The raw payload bytes, without the protocol tag
    pub fn data(&self) -> Vec<u8> {
        self.payload
            .as_ref()
            .map(Payload::to_raw_bytes)
            .unwrap_or_default()
    }

    /// The binary form of the address: the protocol tag followed by the raw payload. Empty for
    /// `Address::UNDEF`.
    pub fn to_bytes(&self) -> Vec<u8> {
        match &self.payload {
            None => vec![],
            Some(payload) => {
                let mut bz = vec![payload.protocol().tag()];
                bz.extend(payload.to_raw_bytes());
                bz
            }
        }
    }

    /// Parse the binary form of an address. An empty slice is `Address::UNDEF`.
    pub fn from_bytes(bz: &[u8]) -> AddressResult<Self> {
        match bz.split_first() {
            None => Ok(Self::UNDEF),
            Some((tag, payload)) => {
                let protocol = Protocol::from_tag(*tag)?;
                Payload::new(protocol, payload).map(Self::from_payload)
            }
        }
    }

    /// Render the textual form of the address using the network's prefix.
    pub fn encode(&self, network: Network) -> String {
        enc::encode_address(self, network)
    }

    /// Parse the textual form of an address. Either network prefix is accepted and discarded;
    /// use `NetworkAddress` to keep it. `<empty>` parses back to `Address::UNDEF`.
    pub fn decode(s: &str) -> AddressResult<Self> {
        if s == enc::UNDEF_ADDRESS_STRING {
            return Ok(Self::UNDEF);
        }
        enc::decode_address(s).map(|addr| addr.address())
    }
}

impl From<Payload> for Address {
    fn from(payload: Payload) -> Self {
        Self::from_payload(payload)
    }
}

impl std::convert::TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(bz: &[u8]) -> AddressResult<Self> {
        Self::from_bytes(bz)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const GENERATOR_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
    const GENERATOR_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn generator() -> PublicKey {
        let mut scalar = [0u8; 32];
        scalar[31] = 1;
        k256::SecretKey::from_slice(&scalar).unwrap().public_key()
    }

    #[test]
    fn it_treats_the_default_as_undef() {
        let addr = Address::default();
        assert!(addr.is_empty());
        assert_eq!(addr, Address::UNDEF);
        assert_eq!(addr.protocol(), None);
        assert!(addr.to_bytes().is_empty());
        assert!(addr.data().is_empty());
        assert_eq!(Address::from_bytes(&[]).unwrap(), Address::UNDEF);
    }

    #[test]
    fn it_round_trips_undef_through_text() {
        for network in [Network::Mainnet, Network::Testnet].iter() {
            let s = Address::UNDEF.encode(*network);
            assert_eq!(s, enc::UNDEF_ADDRESS_STRING);
            assert_eq!(Address::decode(&s).unwrap(), Address::UNDEF);
        }
        // only the exact marker is accepted
        assert!(Address::decode("<empty> ").is_err());
        assert!(Address::decode("").is_err());
    }

    #[test]
    fn it_distinguishes_undef_from_every_protocol() {
        let addrs = [
            Address::new_id(0),
            Address::new_secp256k1(&generator()),
            Address::new_actor(&[0u8; 20]).unwrap(),
            Address::new_bls(&[0u8; 48]).unwrap(),
        ];
        for addr in addrs.iter() {
            assert!(!addr.is_empty());
            assert_ne!(*addr, Address::UNDEF);
        }
    }

    #[test]
    fn it_hashes_the_uncompressed_secp256k1_point() {
        let addr = Address::new_secp256k1(&generator());
        let expected = blake2b160(&hex::decode(GENERATOR_UNCOMPRESSED).unwrap());

        assert_eq!(addr.protocol(), Some(Protocol::Secp256k1));
        assert_eq!(addr.data(), expected.as_ref().to_vec());

        let from_uncompressed =
            Address::new_secp256k1_sec1(&hex::decode(GENERATOR_UNCOMPRESSED).unwrap()).unwrap();
        let from_compressed =
            Address::new_secp256k1_sec1(&hex::decode(GENERATOR_COMPRESSED).unwrap()).unwrap();
        assert_eq!(from_uncompressed, addr);
        assert_eq!(from_compressed, addr);
    }

    #[test]
    fn it_rejects_invalid_secp256k1_keys() {
        let cases = [vec![], vec![4u8; 65], vec![2u8; 10]];
        for case in cases.iter() {
            match Address::new_secp256k1_sec1(case) {
                Err(AddressError::InvalidKey(_)) => {}
                other => panic!("expected InvalidKey, got {:?}", other),
            }
        }
    }

    #[test]
    fn it_validates_actor_and_bls_lengths() {
        match Address::new_actor(&[0u8; 19]) {
            Err(AddressError::InvalidPayloadLength(19)) => {}
            other => panic!("expected InvalidPayloadLength, got {:?}", other),
        }
        assert!(Address::new_actor(&[0u8; 20]).is_ok());

        match Address::new_bls(&[0u8; 47]) {
            Err(AddressError::InvalidPayloadLength(47)) => {}
            other => panic!("expected InvalidPayloadLength, got {:?}", other),
        }
        let key = [9u8; 48];
        assert_eq!(Address::new_bls(&key).unwrap().data(), key.to_vec());
    }

    #[test]
    fn it_prefixes_the_binary_form_with_the_tag() {
        assert_eq!(Address::new_id(0).to_bytes(), vec![0, 0]);
        assert_eq!(Address::new_id(150).to_bytes(), vec![0, 0x96, 0x01]);
        assert_eq!(Address::new_id(150).data(), vec![0x96, 0x01]);

        let data = [5u8; 20];
        let actor = Address::new_actor(&data).unwrap();
        let mut expected = vec![2u8];
        expected.extend_from_slice(&data);
        assert_eq!(actor.to_bytes(), expected);
    }

    #[test]
    fn it_discriminates_protocols_with_the_same_payload() {
        let data = [0xabu8; 20];
        let secp = Address::from_payload(Payload::Secp256k1(data));
        let actor = Address::new_actor(&data).unwrap();

        assert_ne!(secp.to_bytes(), actor.to_bytes());
        assert_ne!(secp, actor);
        assert_eq!(secp.data(), actor.data());
    }

    #[test]
    fn it_round_trips_the_binary_form() {
        let addrs = [
            Address::UNDEF,
            Address::new_id(0),
            Address::new_id(u64::MAX),
            Address::new_secp256k1(&generator()),
            Address::new_actor(&[1u8; 20]).unwrap(),
            Address::new_bls(&[2u8; 48]).unwrap(),
        ];
        for addr in addrs.iter() {
            assert_eq!(Address::from_bytes(&addr.to_bytes()).unwrap(), *addr);
        }
    }

    #[test]
    fn it_rejects_malformed_binary_forms() {
        match Address::from_bytes(&[4, 1, 2, 3]) {
            Err(AddressError::UnknownProtocol(4)) => {}
            other => panic!("expected UnknownProtocol, got {:?}", other),
        }
        match Address::from_bytes(&[0]) {
            Err(AddressError::InvalidPayloadLength(0)) => {}
            other => panic!("expected InvalidPayloadLength, got {:?}", other),
        }
        match Address::from_bytes(&[0, 0x80, 0x00]) {
            Err(AddressError::NonCanonicalEncoding) => {}
            other => panic!("expected NonCanonicalEncoding, got {:?}", other),
        }
        match Address::from_bytes(&[3, 0, 0]) {
            Err(AddressError::InvalidPayloadLength(2)) => {}
            other => panic!("expected InvalidPayloadLength, got {:?}", other),
        }
    }

    #[cfg(feature = "bls")]
    #[test]
    fn it_stores_the_compressed_bls_key() {
        let key = bls12_381::G1Affine::generator();
        let addr = Address::new_bls_key(&key);
        assert_eq!(addr.protocol(), Some(Protocol::BLS));
        assert_eq!(addr.data(), key.to_compressed().to_vec());
        assert_eq!(Address::new_bls(&key.to_compressed()).unwrap(), addr);
    }

    #[test]
    fn it_exposes_the_actor_id() {
        assert_eq!(Address::new_id(42).id(), Some(42));
        assert_eq!(Address::new_actor(&[0u8; 20]).unwrap().id(), None);
        assert_eq!(Address::UNDEF.id(), None);
    }

    #[test]
    fn it_ignores_the_network_for_equality() {
        let addr = Address::new_id(7);
        let main = addr.with_network(Network::Mainnet);
        let test = addr.with_network(Network::Testnet);
        assert_eq!(main, test);
        assert_eq!(main.address(), test.address());
        assert_ne!(main.to_string(), test.to_string());
    }
}
