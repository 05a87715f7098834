use embedded_hal_mock::eh1::{
    delay::NoopDelay,
    digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
    spi::{Mock as SpiMock, Transaction as SpiTransaction},
};
use tracing_test::traced_test;

use super::{control_byte, Access, BitBangInterface, Interface, SpiInterface};
use crate::bitfield::Field;

#[test]
fn control_byte_layout() {
    assert_eq!(control_byte(Access::Read, 0x09), 0x49);
    assert_eq!(control_byte(Access::Write, 0x03), 0x03);
    // the address never leaks into the mode bits
    assert_eq!(control_byte(Access::Write, 0xFC), 0x3C);
    assert_eq!(control_byte(Access::Read, 0xFF), 0x7F);
}

#[test]
#[traced_test]
fn spi_read_sends_control_then_dummy() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::transfer_in_place(vec![0x49, 0xFF], vec![0x00, 0xAD]),
        SpiTransaction::transaction_end(),
    ];
    let mut spi = SpiMock::new(&expectations);
    let mut iface = SpiInterface::new(spi.clone());
    assert_eq!(iface.read_register(0x09).unwrap(), 0xAD);
    spi.done();
}

#[test]
#[traced_test]
fn spi_partial_write_is_read_modify_write() {
    let expectations = [
        // read 0x01, currently 0b0010_0010
        SpiTransaction::transaction_start(),
        SpiTransaction::transfer_in_place(vec![0x41, 0xFF], vec![0x00, 0b0010_0010]),
        SpiTransaction::transaction_end(),
        // NF_LEV = 0b101, WDTH untouched
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0x01, 0b0101_0010]),
        SpiTransaction::transaction_end(),
    ];
    let mut spi = SpiMock::new(&expectations);
    let mut iface = SpiInterface::new(spi.clone());
    iface.write_partial(0x01, 0b101, Field::new(3, 4)).unwrap();
    spi.done();
}

#[test]
fn empty_field_generates_no_traffic() {
    let mut spi = SpiMock::<u8>::new(&[]);
    let mut iface = SpiInterface::new(spi.clone());
    iface.write_partial(0x01, 0xFF, Field::new(0, 0)).unwrap();
    iface.write_partial(0x01, 0xFF, Field::new(1, 9)).unwrap();
    spi.done();
}

/// expected pin activity for one bitbanged transaction
fn bitbang_expectations(
    sent: [u8; 2],
    reply: [u8; 2],
) -> (Vec<PinTransaction>, Vec<PinTransaction>, Vec<PinTransaction>) {
    let mut clk = vec![];
    let mut mosi = vec![];
    let mut miso = vec![];
    for (out, inp) in sent.into_iter().zip(reply) {
        for bit in (0..8).rev() {
            clk.push(PinTransaction::set(PinState::High));
            clk.push(PinTransaction::set(PinState::Low));
            mosi.push(PinTransaction::set(if out >> bit & 1 == 1 {
                PinState::High
            } else {
                PinState::Low
            }));
            miso.push(PinTransaction::get(if inp >> bit & 1 == 1 {
                PinState::High
            } else {
                PinState::Low
            }));
        }
    }
    (clk, mosi, miso)
}

#[test]
#[traced_test]
fn bitbang_read_frames_with_chip_select() {
    let (clk_tx, mosi_tx, miso_tx) = bitbang_expectations([0x49, 0xFF], [0x00, 0xAD]);
    let mut cs = PinMock::new(&[
        // idle state from `new`
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);
    let mut clk = PinMock::new(
        &[vec![PinTransaction::set(PinState::Low)], clk_tx].concat(),
    );
    let mut mosi = PinMock::new(&mosi_tx);
    let mut miso = PinMock::new(&miso_tx);

    let mut iface = BitBangInterface::new(
        cs.clone(),
        clk.clone(),
        mosi.clone(),
        miso.clone(),
        NoopDelay,
        1_000_000,
    )
    .unwrap();
    assert_eq!(iface.read_register(0x09).unwrap(), 0xAD);

    cs.done();
    clk.done();
    mosi.done();
    miso.done();
}

#[test]
fn bitbang_write_shifts_address_and_value() {
    let (clk_tx, mosi_tx, miso_tx) = bitbang_expectations([0x3C, 0x96], [0x00, 0x00]);
    let mut cs = PinMock::new(&[
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);
    let mut clk = PinMock::new(
        &[vec![PinTransaction::set(PinState::Low)], clk_tx].concat(),
    );
    let mut mosi = PinMock::new(&mosi_tx);
    let mut miso = PinMock::new(&miso_tx);

    let mut iface = BitBangInterface::new(
        cs.clone(),
        clk.clone(),
        mosi.clone(),
        miso.clone(),
        NoopDelay,
        2_000_000,
    )
    .unwrap();
    iface.write_register(0x3C, 0x96).unwrap();

    cs.done();
    clk.done();
    mosi.done();
    miso.done();
}
