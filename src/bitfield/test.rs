use super::{extract, insert, mask, Field};

#[test]
fn mask_shapes() {
    assert_eq!(mask(0, 0), 0);
    assert_eq!(mask(1, 0), 0b1);
    assert_eq!(mask(4, 8), 0x0F00);
    assert_eq!(mask(16, 0), 0xFFFF);
    // runs past bit 15 are cut off
    assert_eq!(mask(4, 14), 0xC000);
}

#[test]
fn out_of_range_requests_are_empty() {
    assert_eq!(mask(17, 0), 0);
    assert_eq!(mask(1, 16), 0);
    assert_eq!(extract(0xFFFF, 17, 0), 0);
    assert_eq!(extract(0xFFFF, 4, 16), 0);
    assert_eq!(insert(0xA5A5, 0xFFFF, 17, 0), 0xA5A5);
    assert_eq!(insert(0xA5A5, 0xFFFF, 4, 16), 0xA5A5);
}

#[test]
fn extract_isolated_field() {
    for width in 1..=16u8 {
        for start in 0..=(16 - width).min(15) {
            let max = mask(width, 0);
            for v in [0, 1, max / 2, max] {
                let value = v << start;
                assert_eq!(extract(value, width, start), v, "width {width} start {start}");
            }
        }
    }
}

#[test]
fn insert_then_extract() {
    for x in [0x0000, 0xFFFF, 0xA5A5, 0x1234] {
        for v in [0x0000, 0x0001, 0x00FF, 0xFFFF, 0x5A5A] {
            for (width, start) in [(1, 0), (3, 4), (5, 1), (4, 8), (16, 0), (2, 14)] {
                let out = insert(x, v, width, start);
                assert_eq!(
                    extract(out, width, start),
                    v & (mask(width, start) >> start)
                );
                // bits outside the field are untouched
                assert_eq!(out & !mask(width, start), x & !mask(width, start));
            }
        }
    }
}

#[test]
fn insert_truncates_field() {
    // 0b1111 into a 2 bit field keeps only 0b11
    assert_eq!(insert(0, 0b1111, 2, 4), 0b0011_0000);
}

#[test]
fn register_fields() {
    assert!(Field::checked(0, 0).is_none());
    assert!(Field::checked(4, 5).is_none());
    assert!(Field::checked(9, 0).is_none());
    assert_eq!(Field::checked(3, 4), Some(Field::new(3, 4)));

    let nf_lev = Field::new(3, 4);
    assert_eq!(nf_lev.mask(), 0b0111_0000);
    assert_eq!(nf_lev.max(), 0b111);
    assert_eq!(nf_lev.extract(0b1010_1111), 0b010);
    assert_eq!(nf_lev.insert(0b1000_1111, 0b1101), 0b1101_1111);
    assert!(Field::BYTE.covers_byte());
    assert!(!nf_lev.covers_byte());
}
