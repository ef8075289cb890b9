//! Expands the FIPS-197 Appendix A key and checks two published round keys.

use keysched_core::{Key, KeyScheduler};

fn main() {
    let key = Key::from(0x2B7E1516_28AED2A6_ABF71588_09CF4F3C);
    let round_keys: Vec<_> = KeyScheduler::new(key).take(11).collect();

    assert_eq!(round_keys[0].value(), key.value());
    assert_eq!(round_keys[1].value(), 0xA0FAFE17_88542CB1_23A33939_2A6C7605);
    assert_eq!(round_keys[10].value(), 0xD014F9A8_C9EE2589_E13F0CC8_B6630CA6);

    for (round, round_key) in round_keys.iter().enumerate() {
        println!("[{:02}] = {}", round, round_key);
    }
    println!("example succeeded; schedule matches the published vectors");
}
