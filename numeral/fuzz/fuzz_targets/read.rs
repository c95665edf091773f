#![no_main]

use bytes::Bytes;
use commonware_numeral::{
    buf,
    decode::{read, read_bytes, read_checked},
    Config, Error, Radix,
};
use libfuzzer_sys::fuzz_target;

fn fuzz(data: &[u8]) {
    let cfg = Config::default();
    for radix in [Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
        // The wrapping reader never fails on a leading digit
        let wrapped = read::<u64>(radix, data);
        let leading = data.first().and_then(|&byte| radix.digit(byte));
        assert_eq!(wrapped.is_some(), leading.is_some());

        // The checked reader agrees whenever it succeeds
        match read_checked::<u64>(radix, data, &cfg) {
            Ok((value, rest)) => {
                let (expected, expected_rest) = wrapped.expect("checked read succeeded");
                assert_eq!(value, expected);
                assert_eq!(rest, expected_rest);
            }
            Err(Error::Overflow(_)) => assert!(wrapped.is_some()),
            Err(Error::EndOfBuffer) => assert!(data.is_empty()),
            Err(Error::InvalidDigit(byte)) => assert_eq!(Some(&byte), data.first()),
            Err(err) => panic!("unexpected error: {err}"),
        }

        // The streaming reader consumes the same prefix
        let mut stream = data;
        if let Ok(value) = buf::read::<u64>(radix, &mut stream, &cfg) {
            let (expected, expected_rest) = wrapped.expect("streaming read succeeded");
            assert_eq!(value, expected);
            assert_eq!(stream, expected_rest);
        }

        // The shared remainder matches the borrowed one
        let shared = Bytes::copy_from_slice(data);
        let (_, rest) = read_bytes::<u64>(radix, &shared).unzip();
        assert_eq!(rest.as_deref(), wrapped.map(|(_, rest)| rest));
    }
}

fuzz_target!(|data: &[u8]| {
    fuzz(data);
});
