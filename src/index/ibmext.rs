// AUTOGENERATED BY scripts/gen_index.py FROM THE WINDOWS-31J (CP932) MAPPING.
// DO NOT EDIT BY HAND.

//! IBM extension block of Windows-31J (lead bytes FA..FC), decode only.

/// Shift_JIS code to Unicode code point, sorted by Shift_JIS code.
#[rustfmt::skip]
static FORWARD_TABLE: [(u16, u16); 388] = [
    (0xFA40, 0x2170), (0xFA41, 0x2171), (0xFA42, 0x2172), (0xFA43, 0x2173), (0xFA44, 0x2174), (0xFA45, 0x2175),
    (0xFA46, 0x2176), (0xFA47, 0x2177), (0xFA48, 0x2178), (0xFA49, 0x2179), (0xFA4A, 0x2160), (0xFA4B, 0x2161),
    (0xFA4C, 0x2162), (0xFA4D, 0x2163), (0xFA4E, 0x2164), (0xFA4F, 0x2165), (0xFA50, 0x2166), (0xFA51, 0x2167),
    (0xFA52, 0x2168), (0xFA53, 0x2169), (0xFA54, 0xFFE2), (0xFA55, 0xFFE4), (0xFA56, 0xFF07), (0xFA57, 0xFF02),
    (0xFA58, 0x3231), (0xFA59, 0x2116), (0xFA5A, 0x2121), (0xFA5B, 0x2235), (0xFA5C, 0x7E8A), (0xFA5D, 0x891C),
    (0xFA5E, 0x9348), (0xFA5F, 0x9288), (0xFA60, 0x84DC), (0xFA61, 0x4FC9), (0xFA62, 0x70BB), (0xFA63, 0x6631),
    (0xFA64, 0x68C8), (0xFA65, 0x92F9), (0xFA66, 0x66FB), (0xFA67, 0x5F45), (0xFA68, 0x4E28), (0xFA69, 0x4EE1),
    (0xFA6A, 0x4EFC), (0xFA6B, 0x4F00), (0xFA6C, 0x4F03), (0xFA6D, 0x4F39), (0xFA6E, 0x4F56), (0xFA6F, 0x4F92),
    (0xFA70, 0x4F8A), (0xFA71, 0x4F9A), (0xFA72, 0x4F94), (0xFA73, 0x4FCD), (0xFA74, 0x5040), (0xFA75, 0x5022),
    (0xFA76, 0x4FFF), (0xFA77, 0x501E), (0xFA78, 0x5046), (0xFA79, 0x5070), (0xFA7A, 0x5042), (0xFA7B, 0x5094),
    (0xFA7C, 0x50F4), (0xFA7D, 0x50D8), (0xFA7E, 0x514A), (0xFA80, 0x5164), (0xFA81, 0x519D), (0xFA82, 0x51BE),
    (0xFA83, 0x51EC), (0xFA84, 0x5215), (0xFA85, 0x529C), (0xFA86, 0x52A6), (0xFA87, 0x52C0), (0xFA88, 0x52DB),
    (0xFA89, 0x5300), (0xFA8A, 0x5307), (0xFA8B, 0x5324), (0xFA8C, 0x5372), (0xFA8D, 0x5393), (0xFA8E, 0x53B2),
    (0xFA8F, 0x53DD), (0xFA90, 0xFA0E), (0xFA91, 0x549C), (0xFA92, 0x548A), (0xFA93, 0x54A9), (0xFA94, 0x54FF),
    (0xFA95, 0x5586), (0xFA96, 0x5759), (0xFA97, 0x5765), (0xFA98, 0x57AC), (0xFA99, 0x57C8), (0xFA9A, 0x57C7),
    (0xFA9B, 0xFA0F), (0xFA9C, 0xFA10), (0xFA9D, 0x589E), (0xFA9E, 0x58B2), (0xFA9F, 0x590B), (0xFAA0, 0x5953),
    (0xFAA1, 0x595B), (0xFAA2, 0x595D), (0xFAA3, 0x5963), (0xFAA4, 0x59A4), (0xFAA5, 0x59BA), (0xFAA6, 0x5B56),
    (0xFAA7, 0x5BC0), (0xFAA8, 0x752F), (0xFAA9, 0x5BD8), (0xFAAA, 0x5BEC), (0xFAAB, 0x5C1E), (0xFAAC, 0x5CA6),
    (0xFAAD, 0x5CBA), (0xFAAE, 0x5CF5), (0xFAAF, 0x5D27), (0xFAB0, 0x5D53), (0xFAB1, 0xFA11), (0xFAB2, 0x5D42),
    (0xFAB3, 0x5D6D), (0xFAB4, 0x5DB8), (0xFAB5, 0x5DB9), (0xFAB6, 0x5DD0), (0xFAB7, 0x5F21), (0xFAB8, 0x5F34),
    (0xFAB9, 0x5F67), (0xFABA, 0x5FB7), (0xFABB, 0x5FDE), (0xFABC, 0x605D), (0xFABD, 0x6085), (0xFABE, 0x608A),
    (0xFABF, 0x60DE), (0xFAC0, 0x60D5), (0xFAC1, 0x6120), (0xFAC2, 0x60F2), (0xFAC3, 0x6111), (0xFAC4, 0x6137),
    (0xFAC5, 0x6130), (0xFAC6, 0x6198), (0xFAC7, 0x6213), (0xFAC8, 0x62A6), (0xFAC9, 0x63F5), (0xFACA, 0x6460),
    (0xFACB, 0x649D), (0xFACC, 0x64CE), (0xFACD, 0x654E), (0xFACE, 0x6600), (0xFACF, 0x6615), (0xFAD0, 0x663B),
    (0xFAD1, 0x6609), (0xFAD2, 0x662E), (0xFAD3, 0x661E), (0xFAD4, 0x6624), (0xFAD5, 0x6665), (0xFAD6, 0x6657),
    (0xFAD7, 0x6659), (0xFAD8, 0xFA12), (0xFAD9, 0x6673), (0xFADA, 0x6699), (0xFADB, 0x66A0), (0xFADC, 0x66B2),
    (0xFADD, 0x66BF), (0xFADE, 0x66FA), (0xFADF, 0x670E), (0xFAE0, 0xF929), (0xFAE1, 0x6766), (0xFAE2, 0x67BB),
    (0xFAE3, 0x6852), (0xFAE4, 0x67C0), (0xFAE5, 0x6801), (0xFAE6, 0x6844), (0xFAE7, 0x68CF), (0xFAE8, 0xFA13),
    (0xFAE9, 0x6968), (0xFAEA, 0xFA14), (0xFAEB, 0x6998), (0xFAEC, 0x69E2), (0xFAED, 0x6A30), (0xFAEE, 0x6A6B),
    (0xFAEF, 0x6A46), (0xFAF0, 0x6A73), (0xFAF1, 0x6A7E), (0xFAF2, 0x6AE2), (0xFAF3, 0x6AE4), (0xFAF4, 0x6BD6),
    (0xFAF5, 0x6C3F), (0xFAF6, 0x6C5C), (0xFAF7, 0x6C86), (0xFAF8, 0x6C6F), (0xFAF9, 0x6CDA), (0xFAFA, 0x6D04),
    (0xFAFB, 0x6D87), (0xFAFC, 0x6D6F), (0xFB40, 0x6D96), (0xFB41, 0x6DAC), (0xFB42, 0x6DCF), (0xFB43, 0x6DF8),
    (0xFB44, 0x6DF2), (0xFB45, 0x6DFC), (0xFB46, 0x6E39), (0xFB47, 0x6E5C), (0xFB48, 0x6E27), (0xFB49, 0x6E3C),
    (0xFB4A, 0x6EBF), (0xFB4B, 0x6F88), (0xFB4C, 0x6FB5), (0xFB4D, 0x6FF5), (0xFB4E, 0x7005), (0xFB4F, 0x7007),
    (0xFB50, 0x7028), (0xFB51, 0x7085), (0xFB52, 0x70AB), (0xFB53, 0x710F), (0xFB54, 0x7104), (0xFB55, 0x715C),
    (0xFB56, 0x7146), (0xFB57, 0x7147), (0xFB58, 0xFA15), (0xFB59, 0x71C1), (0xFB5A, 0x71FE), (0xFB5B, 0x72B1),
    (0xFB5C, 0x72BE), (0xFB5D, 0x7324), (0xFB5E, 0xFA16), (0xFB5F, 0x7377), (0xFB60, 0x73BD), (0xFB61, 0x73C9),
    (0xFB62, 0x73D6), (0xFB63, 0x73E3), (0xFB64, 0x73D2), (0xFB65, 0x7407), (0xFB66, 0x73F5), (0xFB67, 0x7426),
    (0xFB68, 0x742A), (0xFB69, 0x7429), (0xFB6A, 0x742E), (0xFB6B, 0x7462), (0xFB6C, 0x7489), (0xFB6D, 0x749F),
    (0xFB6E, 0x7501), (0xFB6F, 0x756F), (0xFB70, 0x7682), (0xFB71, 0x769C), (0xFB72, 0x769E), (0xFB73, 0x769B),
    (0xFB74, 0x76A6), (0xFB75, 0xFA17), (0xFB76, 0x7746), (0xFB77, 0x52AF), (0xFB78, 0x7821), (0xFB79, 0x784E),
    (0xFB7A, 0x7864), (0xFB7B, 0x787A), (0xFB7C, 0x7930), (0xFB7D, 0xFA18), (0xFB7E, 0xFA19), (0xFB80, 0xFA1A),
    (0xFB81, 0x7994), (0xFB82, 0xFA1B), (0xFB83, 0x799B), (0xFB84, 0x7AD1), (0xFB85, 0x7AE7), (0xFB86, 0xFA1C),
    (0xFB87, 0x7AEB), (0xFB88, 0x7B9E), (0xFB89, 0xFA1D), (0xFB8A, 0x7D48), (0xFB8B, 0x7D5C), (0xFB8C, 0x7DB7),
    (0xFB8D, 0x7DA0), (0xFB8E, 0x7DD6), (0xFB8F, 0x7E52), (0xFB90, 0x7F47), (0xFB91, 0x7FA1), (0xFB92, 0xFA1E),
    (0xFB93, 0x8301), (0xFB94, 0x8362), (0xFB95, 0x837F), (0xFB96, 0x83C7), (0xFB97, 0x83F6), (0xFB98, 0x8448),
    (0xFB99, 0x84B4), (0xFB9A, 0x8553), (0xFB9B, 0x8559), (0xFB9C, 0x856B), (0xFB9D, 0xFA1F), (0xFB9E, 0x85B0),
    (0xFB9F, 0xFA20), (0xFBA0, 0xFA21), (0xFBA1, 0x8807), (0xFBA2, 0x88F5), (0xFBA3, 0x8A12), (0xFBA4, 0x8A37),
    (0xFBA5, 0x8A79), (0xFBA6, 0x8AA7), (0xFBA7, 0x8ABE), (0xFBA8, 0x8ADF), (0xFBA9, 0xFA22), (0xFBAA, 0x8AF6),
    (0xFBAB, 0x8B53), (0xFBAC, 0x8B7F), (0xFBAD, 0x8CF0), (0xFBAE, 0x8CF4), (0xFBAF, 0x8D12), (0xFBB0, 0x8D76),
    (0xFBB1, 0xFA23), (0xFBB2, 0x8ECF), (0xFBB3, 0xFA24), (0xFBB4, 0xFA25), (0xFBB5, 0x9067), (0xFBB6, 0x90DE),
    (0xFBB7, 0xFA26), (0xFBB8, 0x9115), (0xFBB9, 0x9127), (0xFBBA, 0x91DA), (0xFBBB, 0x91D7), (0xFBBC, 0x91DE),
    (0xFBBD, 0x91ED), (0xFBBE, 0x91EE), (0xFBBF, 0x91E4), (0xFBC0, 0x91E5), (0xFBC1, 0x9206), (0xFBC2, 0x9210),
    (0xFBC3, 0x920A), (0xFBC4, 0x923A), (0xFBC5, 0x9240), (0xFBC6, 0x923C), (0xFBC7, 0x924E), (0xFBC8, 0x9259),
    (0xFBC9, 0x9251), (0xFBCA, 0x9239), (0xFBCB, 0x9267), (0xFBCC, 0x92A7), (0xFBCD, 0x9277), (0xFBCE, 0x9278),
    (0xFBCF, 0x92E7), (0xFBD0, 0x92D7), (0xFBD1, 0x92D9), (0xFBD2, 0x92D0), (0xFBD3, 0xFA27), (0xFBD4, 0x92D5),
    (0xFBD5, 0x92E0), (0xFBD6, 0x92D3), (0xFBD7, 0x9325), (0xFBD8, 0x9321), (0xFBD9, 0x92FB), (0xFBDA, 0xFA28),
    (0xFBDB, 0x931E), (0xFBDC, 0x92FF), (0xFBDD, 0x931D), (0xFBDE, 0x9302), (0xFBDF, 0x9370), (0xFBE0, 0x9357),
    (0xFBE1, 0x93A4), (0xFBE2, 0x93C6), (0xFBE3, 0x93DE), (0xFBE4, 0x93F8), (0xFBE5, 0x9431), (0xFBE6, 0x9445),
    (0xFBE7, 0x9448), (0xFBE8, 0x9592), (0xFBE9, 0xF9DC), (0xFBEA, 0xFA29), (0xFBEB, 0x969D), (0xFBEC, 0x96AF),
    (0xFBED, 0x9733), (0xFBEE, 0x973B), (0xFBEF, 0x9743), (0xFBF0, 0x974D), (0xFBF1, 0x974F), (0xFBF2, 0x9751),
    (0xFBF3, 0x9755), (0xFBF4, 0x9857), (0xFBF5, 0x9865), (0xFBF6, 0xFA2A), (0xFBF7, 0xFA2B), (0xFBF8, 0x9927),
    (0xFBF9, 0xFA2C), (0xFBFA, 0x999E), (0xFBFB, 0x9A4E), (0xFBFC, 0x9AD9), (0xFC40, 0x9ADC), (0xFC41, 0x9B75),
    (0xFC42, 0x9B72), (0xFC43, 0x9B8F), (0xFC44, 0x9BB1), (0xFC45, 0x9BBB), (0xFC46, 0x9C00), (0xFC47, 0x9D70),
    (0xFC48, 0x9D6B), (0xFC49, 0xFA2D), (0xFC4A, 0x9E19), (0xFC4B, 0x9ED1),
];

/// Converts a two-byte Shift_JIS code to a Unicode code point,
/// or `0xFFFF` if the code is not part of the IBM extension block.
#[inline]
pub fn forward(code: u16) -> u16 {
    match FORWARD_TABLE.binary_search_by_key(&code, |&(c, _)| c) {
        Ok(i) => FORWARD_TABLE[i].1,
        Err(_) => 0xFFFF,
    }
}
