#![no_main]

use arbitrary::Arbitrary;
use commonware_numeral::{
    as_hexadecimal,
    decode::{read, read_checked},
    encode::{from_hexadecimal, pack},
    Config, Integer, Radix,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzRadix {
    Octal,
    Decimal,
    Hexadecimal,
}

impl From<FuzzRadix> for Radix {
    fn from(radix: FuzzRadix) -> Self {
        match radix {
            FuzzRadix::Octal => Radix::Octal,
            FuzzRadix::Decimal => Radix::Decimal,
            FuzzRadix::Hexadecimal => Radix::Hexadecimal,
        }
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    U8(FuzzRadix, u8),
    U64(FuzzRadix, u64),
    U128(FuzzRadix, u128),
    I32(FuzzRadix, i32),
    I128(FuzzRadix, i128),
    Dump(Vec<u8>),
}

fn roundtrip<T: Integer + std::fmt::Debug>(radix: Radix, value: T) {
    let Some(packed) = pack(radix, value) else {
        assert!(value.magnitude().is_none(), "non-negative value was rejected");
        return;
    };
    assert_eq!(Some(packed.len()), radix.size(value));

    let (decoded, rest) = read::<T>(radix, &packed).expect("failed to read packed value");
    assert!(decoded == value, "expected {value:?}, got {decoded:?}");
    assert!(rest.is_empty());

    let cfg = Config::strict(packed.len());
    let (decoded, rest) =
        read_checked::<T>(radix, &packed, &cfg).expect("failed to read packed value");
    assert!(decoded == value, "expected {value:?}, got {decoded:?}");
    assert!(rest.is_empty());
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::U8(radix, value) => roundtrip(radix.into(), value),
        FuzzInput::U64(radix, value) => roundtrip(radix.into(), value),
        FuzzInput::U128(radix, value) => roundtrip(radix.into(), value),
        FuzzInput::I32(radix, value) => roundtrip(radix.into(), value),
        FuzzInput::I128(radix, value) => roundtrip(radix.into(), value),
        FuzzInput::Dump(raw) => {
            let hex = as_hexadecimal(&raw);
            assert_eq!(hex.len(), 2 * raw.len());
            let decoded = from_hexadecimal(&hex).expect("failed to decode dump");
            assert_eq!(decoded, raw);
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
