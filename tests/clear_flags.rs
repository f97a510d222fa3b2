use clearflag_rs::clear_flags;

#[test]
fn clears_only_the_masked_bit() {
    // Three records with flags 0x3, 0x5, 0xC; clearing 0x1 must yield
    // 0x2, 0x4, 0xC.
    assert_eq!(clear_flags(0x3, 0x1), 0x2);
    assert_eq!(clear_flags(0x5, 0x1), 0x4);
    assert_eq!(clear_flags(0xC, 0x1), 0xC);
}

#[test]
fn multi_bit_mask_clears_each_set_bit() {
    // Mask 0x104 = secondary (0x100) + unmapped (0x4).
    assert_eq!(clear_flags(0x563, 0x104), 0x463);
    assert_eq!(clear_flags(0x104, 0x104), 0x0);
    assert_eq!(clear_flags(0x0, 0x104), 0x0);
}

#[test]
fn zero_mask_changes_nothing() {
    for flags in [0x0u16, 0x1, 0x4, 0x63, 0x400, 0xFFFF] {
        assert_eq!(clear_flags(flags, 0), flags);
    }
}

#[test]
fn full_mask_clears_every_bit() {
    for flags in [0x0u16, 0x1, 0x63, 0x8000, 0xFFFF] {
        assert_eq!(clear_flags(flags, 0xFFFF), 0);
    }
}

#[test]
fn clearing_is_idempotent() {
    for flags in [0x0u16, 0x3, 0x5, 0xC, 0x4FF, 0xFFFF] {
        for mask in [0x0u16, 0x1, 0x4, 0x400, 0xFFFF] {
            let once = clear_flags(flags, mask);
            assert_eq!(clear_flags(once, mask), once);
        }
    }
}

#[test]
fn untouched_bits_survive_for_the_full_flag_width() {
    // Every bit outside the mask passes through; every bit inside is zeroed.
    for bit in 0..16u16 {
        let flags = 0xFFFF;
        let mask = 1 << bit;
        assert_eq!(clear_flags(flags, mask), !mask);
    }
}
