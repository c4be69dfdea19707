// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Quarter-wave sine table.
//!
//! @generated by `cargo xtask sin-table`. Do not edit by hand.
//!
//! Entry `i` is `round(sin(i * PI / 512) * (2^31 - 1))` for `i` in `0..=256`.
//! The last entry is the quarter-wave endpoint, so the pair `(i, i + 1)` is in
//! bounds for every 8-bit index `i`.

/// Number of interpolation segments spanning `[0, PI/2]`.
pub(crate) const SIN_QTR_SEGMENTS: usize = 256;

/// `sin` sampled over `[0, PI/2]`, in units of `2^31 - 1`.
#[rustfmt::skip]
pub(crate) const SIN_QTR_TABLE: [u32; SIN_QTR_SEGMENTS + 1] = [
    0x0000_0000, 0x00c9_0f88, 0x0192_1d20, 0x025b_26d7, 0x0324_2abf, 0x03ed_26e6,
    0x04b6_195d, 0x057f_0035, 0x0647_d97c, 0x0710_a345, 0x07d9_5b9e, 0x08a2_009a,
    0x096a_9049, 0x0a33_08bc, 0x0afb_6805, 0x0bc3_ac35, 0x0c8b_d35e, 0x0d53_db92,
    0x0e1b_c2e4, 0x0ee3_8766, 0x0fab_272b, 0x1072_a048, 0x1139_f0cf, 0x1201_16d5,
    0x12c8_106e, 0x138e_dbb1, 0x1455_76b1, 0x151b_df85, 0x15e2_1444, 0x16a8_1305,
    0x176d_d9de, 0x1833_66e8, 0x18f8_b83c, 0x19bd_cbf3, 0x1a82_a025, 0x1b47_32ef,
    0x1c0b_826a, 0x1ccf_8cb3, 0x1d93_4fe5, 0x1e56_ca1e, 0x1f19_f97b, 0x1fdc_dc1b,
    0x209f_701c, 0x2161_b39f, 0x2223_a4c5, 0x22e5_41af, 0x23a6_887e, 0x2467_7757,
    0x2528_0c5d, 0x25e8_45b6, 0x26a8_2185, 0x2767_9df4, 0x2826_b928, 0x28e5_714a,
    0x29a3_c485, 0x2a61_b101, 0x2b1f_34eb, 0x2bdc_4e6f, 0x2c98_fbba, 0x2d55_3afb,
    0x2e11_0a62, 0x2ecc_681e, 0x2f87_5262, 0x3041_c760, 0x30fb_c54d, 0x31b5_4a5d,
    0x326e_54c7, 0x3326_e2c2, 0x33de_f287, 0x3496_824f, 0x354d_9056, 0x3604_1ad9,
    0x36ba_2013, 0x376f_9e46, 0x3824_93b0, 0x38d8_fe93, 0x398c_dd32, 0x3a40_2dd1,
    0x3af2_eeb7, 0x3ba5_1e29, 0x3c56_ba70, 0x3d07_c1d5, 0x3db8_32a5, 0x3e68_0b2c,
    0x3f17_49b7, 0x3fc5_ec97, 0x4073_f21d, 0x4121_589a, 0x41ce_1e64, 0x427a_41d0,
    0x4325_c135, 0x43d0_9aec, 0x447a_cd50, 0x4524_56bc, 0x45cd_358f, 0x4675_6827,
    0x471c_ece6, 0x47c3_c22e, 0x4869_e664, 0x490f_57ee, 0x49b4_1533, 0x4a58_1c9d,
    0x4afb_6c97, 0x4b9e_038f, 0x4c3f_dff3, 0x4ce1_0034, 0x4d81_62c3, 0x4e21_0617,
    0x4ebf_e8a4, 0x4f5e_08e2, 0x4ffb_654c, 0x5097_fc5e, 0x5133_cc94, 0x51ce_d46e,
    0x5269_126e, 0x5302_8517, 0x539b_2aef, 0x5433_027d, 0x54ca_0a4a, 0x5560_40e2,
    0x55f5_a4d2, 0x568a_34a9, 0x571d_eef9, 0x57b0_d255, 0x5842_dd54, 0x58d4_0e8c,
    0x5964_6497, 0x59f3_de12, 0x5a82_7999, 0x5b10_35ce, 0x5b9d_1153, 0x5c29_0acc,
    0x5cb4_20df, 0x5d3e_5236, 0x5dc7_9d7b, 0x5e50_015d, 0x5ed7_7c89, 0x5f5e_0db2,
    0x5fe3_b38d, 0x6068_6cce, 0x60ec_382f, 0x616f_146b, 0x61f1_003e, 0x6271_fa68,
    0x62f2_01ac, 0x6371_14cc, 0x63ef_328f, 0x646c_59bf, 0x64e8_8925, 0x6563_bf91,
    0x65dd_fbd2, 0x6657_3cbb, 0x66cf_811f, 0x6746_c7d7, 0x67bd_0fbc, 0x6832_57aa,
    0x68a6_9e80, 0x6919_e31f, 0x698c_246b, 0x69fd_614a, 0x6a6d_98a3, 0x6adc_c964,
    0x6b4a_f278, 0x6bb8_12d0, 0x6c24_295f, 0x6c8f_351b, 0x6cf9_34fb, 0x6d62_27f9,
    0x6dca_0d14, 0x6e30_e349, 0x6e96_a99c, 0x6efb_5f11, 0x6f5f_02b1, 0x6fc1_9384,
    0x7023_1099, 0x7083_78fe, 0x70e2_cbc5, 0x7141_0804, 0x719e_2cd1, 0x71fa_3948,
    0x7255_2c84, 0x72af_05a6, 0x7307_c3cf, 0x735f_6625, 0x73b5_ebd0, 0x740b_53fa,
    0x745f_9dd0, 0x74b2_c883, 0x7504_d344, 0x7555_bd4b, 0x75a5_85ce, 0x75f4_2c0a,
    0x7641_af3c, 0x768e_0ea5, 0x76d9_4988, 0x7723_5f2c, 0x776c_4eda, 0x77b4_17df,
    0x77fa_b988, 0x7840_3328, 0x7884_8413, 0x78c7_aba1, 0x7909_a92c, 0x794a_7c11,
    0x798a_23b0, 0x79c8_9f6d, 0x7a05_eeac, 0x7a42_10d8, 0x7a7d_055a, 0x7ab6_cba3,
    0x7aef_6323, 0x7b26_cb4e, 0x7b5d_039d, 0x7b92_0b88, 0x7bc5_e28f, 0x7bf8_882f,
    0x7c29_fbed, 0x7c5a_3d4f, 0x7c89_4bdd, 0x7cb7_2723, 0x7ce3_ceb1, 0x7d0f_4217,
    0x7d39_80eb, 0x7d62_8ac5, 0x7d8a_5f3f, 0x7db0_fdf7, 0x7dd6_668e, 0x7dfa_98a7,
    0x7e1d_93e9, 0x7e3f_57fe, 0x7e5f_e492, 0x7e7f_3956, 0x7e9d_55fb, 0x7eba_3a38,
    0x7ed5_e5c5, 0x7ef0_585f, 0x7f09_91c3, 0x7f21_91b3, 0x7f38_57f5, 0x7f4d_e450,
    0x7f62_368e, 0x7f75_4e7f, 0x7f87_2bf2, 0x7f97_cebc, 0x7fa7_36b3, 0x7fb5_63b2,
    0x7fc2_5595, 0x7fce_0c3d, 0x7fd8_878d, 0x7fe1_c76a, 0x7fe9_cbbf, 0x7ff0_9477,
    0x7ff6_2181, 0x7ffa_72d0, 0x7ffd_8859, 0x7fff_6215, 0x7fff_ffff,
];
