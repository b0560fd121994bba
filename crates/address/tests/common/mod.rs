#![allow(dead_code)]

use filaddr::Address;
use rand::Rng;

/// A secp256k1 address for a freshly generated key.
pub fn new_secp256k1_address() -> Address {
    let key = k256::SecretKey::random(&mut rand::thread_rng());
    Address::new_secp256k1(&key.public_key())
}

/// An actor address over random digest bytes.
pub fn new_actor_address() -> Address {
    let data: [u8; 20] = rand::random();
    Address::new_actor(&data).unwrap()
}

/// An ID address for a random actor ID.
pub fn new_id_address() -> Address {
    Address::new_id(rand::random())
}

/// A BLS address over random key bytes. The codec only checks the key's length.
pub fn new_bls_address() -> Address {
    let mut key = [0u8; 48];
    rand::thread_rng().fill(&mut key[..]);
    Address::new_bls(&key).unwrap()
}

/// One fresh address per protocol.
pub fn new_addresses() -> Vec<Address> {
    vec![
        new_id_address(),
        new_secp256k1_address(),
        new_actor_address(),
        new_bls_address(),
    ]
}
