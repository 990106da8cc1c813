//! Generators, isogeny tables and endomorphism coefficients for the
//! BLS12-381 groups.

use super::fp::Fp;
use super::fp2::Fp2;

/// b = 4 for G1.
pub(crate) const B_G1: Fp = Fp::from_raw_unchecked([
            0xaa270000000cfff3, 0x53cc0032fc34000a,
            0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7,
            0x8ec9733bbf78ab2f, 0x09d645513d83de7e,
        ]);

/// b = 4(u + 1) for G2.
pub(crate) const B_G2: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0xaa270000000cfff3, 0x53cc0032fc34000a,
                0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7,
                0x8ec9733bbf78ab2f, 0x09d645513d83de7e,
            ]),
        c1: Fp::from_raw_unchecked([
                0xaa270000000cfff3, 0x53cc0032fc34000a,
                0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7,
                0x8ec9733bbf78ab2f, 0x09d645513d83de7e,
            ]),
    };

pub(crate) const G1_GENERATOR_X: Fp = Fp::from_raw_unchecked([
            0x5cb38790fd530c16, 0x7817fc679976fff5,
            0x154f95c7143ba1c1, 0xf0ae6acdf3d0e747,
            0xedce6ecc21dbf440, 0x120177419e0bfb75,
        ]);

pub(crate) const G1_GENERATOR_Y: Fp = Fp::from_raw_unchecked([
            0xbaac93d50ce72271, 0x8c22631a7918fd8e,
            0xdd595f13570725ce, 0x51ac582950405194,
            0x0e1c8c3fad0059c0, 0x0bbc3efc5008a26a,
        ]);

pub(crate) const G2_GENERATOR_X: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0xf5f28fa202940a10, 0xb3f5fb2687b4961a,
                0xa1a893b53e2ae580, 0x9894999d1a3caee9,
                0x6f67b7631863366b, 0x058191924350bcd7,
            ]),
        c1: Fp::from_raw_unchecked([
                0xa5a9c0759e23f606, 0xaaa0c59dbccd60c3,
                0x3bb17e18e2867806, 0x1b1ab6cc8541b367,
                0xc2b6ed0ef2158547, 0x11922a097360edf3,
            ]),
    };

pub(crate) const G2_GENERATOR_Y: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x4c730af860494c4a, 0x597cfa1f5e369c5a,
                0xe7e6856caa0a635a, 0xbbefb5e96e0d495f,
                0x07d3a975f0ef25a2, 0x0083fd8e7e80dae5,
            ]),
        c1: Fp::from_raw_unchecked([
                0xadc0fc92df64b05d, 0x18aa270a2b1461dc,
                0x86adac6a3be4eba0, 0x79495c4ec93da33a,
                0xe7175850a43ccaed, 0x0b2bc2a163de1bf2,
            ]),
    };

/// psi(x, y) coefficient for x: 1/(u + 1)^((p − 1) / 3).
pub(crate) const PSI_COEFF_X: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
        c1: Fp::from_raw_unchecked([
                0x890dc9e4867545c3, 0x2af322533285a5d5,
                0x50880866309b7e2c, 0xa20d1b8c7e881024,
                0x14e4f04fe2db9068, 0x14e56d3f1564853a,
            ]),
    };

/// psi(x, y) coefficient for y: 1/(u + 1)^((p − 1) / 2).
pub(crate) const PSI_COEFF_Y: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x3e2f585da55c9ad1, 0x4294213d86c18183,
                0x382844c88b623732, 0x92ad2afd19103e18,
                0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8,
            ]),
        c1: Fp::from_raw_unchecked([
                0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c,
                0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7,
                0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2,
            ]),
    };

/// psi²(x, y) coefficient for x (the y coefficient is −1).
pub(crate) const PSI2_COEFF_X: Fp = Fp::from_raw_unchecked([
            0xcd03c9e48671f071, 0x5dab22461fcda5d2,
            0x587042afd3851b95, 0x8eb60ebe01bacb9e,
            0x03f97d6e83d050d2, 0x18f0206554638741,
        ]);

/// SSWU constants of the 11-isogenous curve to G1 (Z = 11).
pub(crate) const G1_ISO_A: Fp = Fp::from_raw_unchecked([
            0x2f65aa0e9af5aa51, 0x86464c2d1e8416c3,
            0xb85ce591b7bd31e2, 0x27e11c91b5f24e7c,
            0x28376eda6bfc1835, 0x155455c3e5071d85,
        ]);
pub(crate) const G1_ISO_B: Fp = Fp::from_raw_unchecked([
            0xfb996971fe22a1e0, 0x9aa93eb35b742d6f,
            0x8c476013de99c5c4, 0x873e27c3a221e571,
            0xca72b5e45a52d888, 0x06824061418a386b,
        ]);
pub(crate) const G1_SSWU_Z: Fp = Fp::from_raw_unchecked([
            0x886c00000023ffdc, 0x0f70008d3090001d,
            0x77672417ed5828c3, 0x9dac23e943dc1740,
            0x50553f1b9c131521, 0x078c712fbe0ab6e8,
        ]);

/// SSWU constants of the 3-isogenous curve to G2 (Z = −2 − u).
pub(crate) const G2_ISO_A: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
        c1: Fp::from_raw_unchecked([
                0xe53a000003135242, 0x01080c0fdef80285,
                0xe7889edbe340f6bd, 0x0b51375126310601,
                0x02d6985717c744ab, 0x1220b4e979ea5467,
            ]),
    };
pub(crate) const G2_ISO_B: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x22ea00000cf89db2, 0x6ec832df71380aa4,
                0x6e1b94403db5a66e, 0x75bf3c53a79473ba,
                0x3dd3a569412c0a34, 0x125cdb5e74dc4fd1,
            ]),
        c1: Fp::from_raw_unchecked([
                0x22ea00000cf89db2, 0x6ec832df71380aa4,
                0x6e1b94403db5a66e, 0x75bf3c53a79473ba,
                0x3dd3a569412c0a34, 0x125cdb5e74dc4fd1,
            ]),
    };
pub(crate) const G2_SSWU_Z: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
                0x87ebfffffff9555c, 0x656fffe5da8ffffa,
                0x0fd0749345d33ad2, 0xd951e663066576f4,
                0xde291a3d41e980d3, 0x0815664c7dfe040d,
            ]),
        c1: Fp::from_raw_unchecked([
                0x43f5fffffffcaaae, 0x32b7fff2ed47fffd,
                0x07e83a49a2e99d69, 0xeca8f3318332bb7a,
                0xef148d1ea0f4c069, 0x040ab3263eff0206,
            ]),
    };

pub(crate) static G1_ISO_X_NUM: [Fp; 12] = [
    Fp::from_raw_unchecked([
            0x0d003ffed4ec2417, 0x96bd29ceb2ee0a73,
            0x3f4c067a89145ec4, 0xa2fc31b847ee8a95,
            0xde7231ffb18fac55, 0x158e0f76e476090f,
        ]),
    Fp::from_raw_unchecked([
            0xac0c77c09c4050a1, 0xb0cf062d1a570de2,
            0x2c98db11544c1228, 0x32bd3c5553e81e85,
            0xf67c174e6d527fe6, 0x093f8cea062e6791,
        ]),
    Fp::from_raw_unchecked([
            0xe1f7cb8f6b1f4d88, 0x0957329d9b1a19fd,
            0x288675d4436a9f6a, 0x6845a0cca2c02763,
            0x4461ec4b917da860, 0x07f3bd53015e6b23,
        ]),
    Fp::from_raw_unchecked([
            0xe85552b329844333, 0x536e2e0cfbec2741,
            0x9e0a17cbf82f79c6, 0x8c7ddf4b05450aff,
            0xdb5fad9e216bdaf3, 0x110d657a05fbc212,
        ]),
    Fp::from_raw_unchecked([
            0xc99e35394fa9156b, 0x6ce029d807e2b3d9,
            0xbe7388af60448c93, 0x7aae34526e0d4502,
            0xbd3b00d638054106, 0x0f186c1a7e327b64,
        ]),
    Fp::from_raw_unchecked([
            0x9d71850cf2a4eb76, 0xa1e2cbaf11a94882,
            0x1f4ea3d48acfcbec, 0x9e98e428e340af03,
            0xe381dd7d1b8bb1b4, 0x05c0c2b0fd1e4d64,
        ]),
    Fp::from_raw_unchecked([
            0xbaee91af9ca50c45, 0x20e25dd3dd492d01,
            0xefa00c6cd9e53c86, 0x6262407581a211b8,
            0x5a3ca9c0e06c1856, 0x13ba34d14373dba6,
        ]),
    Fp::from_raw_unchecked([
            0xbf457d2fe217f42d, 0xe0e6b52afc005697,
            0x9e22085a3a6b4dbd, 0x799520b331bce2e3,
            0x09cc9d626e89ad81, 0x04fdf56a58f4025a,
        ]),
    Fp::from_raw_unchecked([
            0x75b54165abf79fde, 0xd37c50bfbd00bdf4,
            0x38f5f9aa17e2ba96, 0x9aa6c11b4d1d4d87,
            0x32686a535c75f368, 0x14f479795227d4ea,
        ]),
    Fp::from_raw_unchecked([
            0xb9b1b2e8afc7a785, 0xbd5fd79da75b036f,
            0x39fc48073bc15406, 0xef567da232823d20,
            0x33e6e9e99fd81bbd, 0x1133efc1444bc507,
        ]),
    Fp::from_raw_unchecked([
            0x21a8ca8825c85294, 0x8fd396313c5ac893,
            0x849aa26d2876713d, 0x1b7ea15ed219250f,
            0x48e8b074d82246fe, 0x013066a66c17b42e,
        ]),
    Fp::from_raw_unchecked([
            0xe3868d4e0dcddeba, 0x947e0264fa2a211a,
            0x4d2c1a04280fd5a8, 0x4f71580f7826d2ca,
            0x92d8ee341248df54, 0x17339783cbdff101,
        ]),
];

pub(crate) static G1_ISO_X_DEN: [Fp; 11] = [
    Fp::from_raw_unchecked([
            0xb962a077fdb0f945, 0xa6a9740fefda13a0,
            0xc14d568c3ed6c544, 0xb43fc37b908b133e,
            0x9c0b3ac929599016, 0x0165aa6c93ad115f,
        ]),
    Fp::from_raw_unchecked([
            0x23279a3ba506c1d9, 0x92cfca0a9465176a,
            0x3b294ab13755f0ff, 0x116dda1c5070ae93,
            0xed4530924cec2045, 0x083383d6ed81f1ce,
        ]),
    Fp::from_raw_unchecked([
            0x9885c2a6449fecfc, 0x4a2b54ccd37733f0,
            0x17da9ffd8738c142, 0xa0fba72732b3fafd,
            0xff364f36e54b6812, 0x0f29c13c660523e2,
        ]),
    Fp::from_raw_unchecked([
            0xe349cc118278f041, 0xd487228f2f3204fb,
            0xc9d325849ade5150, 0x43a92bd69c15c2df,
            0x1c2c7844bc417be4, 0x12025184f407440c,
        ]),
    Fp::from_raw_unchecked([
            0x587f65ae6acb057b, 0x1444ef325140201f,
            0xfbf995e71270da49, 0xccda066072436a42,
            0x7408904f0f186bb2, 0x13b93c63edf6c015,
        ]),
    Fp::from_raw_unchecked([
            0xfb918622cd141920, 0x4a4c64423ecaddb4,
            0x0beb232927f7fb26, 0x30f94df6f83a3dc2,
            0xaeedd424d780f388, 0x06cc402dd594bbeb,
        ]),
    Fp::from_raw_unchecked([
            0xd41f761151b23f8f, 0x32a92465435719b3,
            0x64f436e888c62cb9, 0xdf70a9a1f757c6e4,
            0x6933a38d5b594c81, 0x0c6f7f7237b46606,
        ]),
    Fp::from_raw_unchecked([
            0x693c08747876c8f7, 0x22c9850bf9cf80f0,
            0x8e9071dab950c124, 0x89bc62d61c7baf23,
            0xbc6be2d8dad57c23, 0x17916987aa14a122,
        ]),
    Fp::from_raw_unchecked([
            0x1be3ff439c1316fd, 0x9965243a7571dfa7,
            0xc7f7f62962f5cd81, 0x32c6aa9af394361c,
            0xbbc2ee18e1c227f4, 0x0c102cbac531bb34,
        ]),
    Fp::from_raw_unchecked([
            0x997614c97bacbf07, 0x61f86372b99192c0,
            0x5b8c95fc14353fc3, 0xca2b066c2a87492f,
            0x16178f5bbf698711, 0x12a6dcd7f0f4e0e8,
        ]),
    Fp::from_raw_unchecked([
            0x760900000002fffd, 0xebf4000bc40c0002,
            0x5f48985753c758ba, 0x77ce585370525745,
            0x5c071a97a256ec6d, 0x15f65ec3fa80e493,
        ]),
];

pub(crate) static G1_ISO_Y_NUM: [Fp; 16] = [
    Fp::from_raw_unchecked([
            0x8ea8800c1d7c3844, 0x015e61a6f7fb5898,
            0x992e42b6f1f382b1, 0x9845a87ae8183edf,
            0xcda08f0fc0e28643, 0x0cd10aa56555e389,
        ]),
    Fp::from_raw_unchecked([
            0x203caaa05abd616c, 0x202cac3268df0787,
            0x0940721567199599, 0x4f971352ee59c8f7,
            0xdab8810fadcdd733, 0x0f736410773ea144,
        ]),
    Fp::from_raw_unchecked([
            0xa625bd6dd5a2b471, 0xe92dcc1b432de182,
            0x982b3024725aed96, 0x64768e670bcac1ce,
            0xc74ae06313bf8cf9, 0x060a05f6adc0bd94,
        ]),
    Fp::from_raw_unchecked([
            0x5da7026a404fecf0, 0xf608a65852ffe8f8,
            0x2dad03ec007aeab6, 0xb495ab8dfa06a56c,
            0x97d51870f33280df, 0x0e4a44059bf44442,
        ]),
    Fp::from_raw_unchecked([
            0x60f39d380075596c, 0xed60b31b3e893102,
            0xfb419fd261f84e23, 0xf697c6e45e13d55f,
            0xe630d96992b38b45, 0x167af0add4645e0c,
        ]),
    Fp::from_raw_unchecked([
            0x14cdf5ceeee3edce, 0x7d613f08d73f767d,
            0x6d8335d7a28d233a, 0xba088aefcb462e17,
            0x7bc088b4152f1bcf, 0x1803328f4bf7cf06,
        ]),
    Fp::from_raw_unchecked([
            0x54598d4f2857d15b, 0x3c4fd27d2e0cc5e6,
            0xa433e6b92b297866, 0x5ec478187cea890e,
            0x9109119a5add0ddc, 0x1215f6c077a0087a,
        ]),
    Fp::from_raw_unchecked([
            0x261e6a8d083add87, 0xe85d6d6e3adaaf6e,
            0xe1c78c228e01a46e, 0xbff9a2f0b98fdeaf,
            0x56211635c0675f72, 0x0f2be64653168c20,
        ]),
    Fp::from_raw_unchecked([
            0x28ead67bb1f24b57, 0x4e6cae5b5fe84dcc,
            0x29d8544ab65d87bd, 0x69f078e149ddde3d,
            0xa20cd208515e579f, 0x056475b7cf217306,
        ]),
    Fp::from_raw_unchecked([
            0x73d3414fc3ed1891, 0x42110a04a72cb5e8,
            0xccdb43e30e7a0a36, 0xffd85293d9356478,
            0xca1ac651180ed074, 0x019e548776ee0bce,
        ]),
    Fp::from_raw_unchecked([
            0xb4354735760e7e85, 0x1d17e9ef079a53b0,
            0xfccc95468e36fbf8, 0x5010efa76b3e3121,
            0x8ffe9a62940bb618, 0x0739302686f683b4,
        ]),
    Fp::from_raw_unchecked([
            0x04a0406ff4756c94, 0x1fcf881296c1fe3b,
            0x4828f7900c96a82f, 0x567b7a272f6ab972,
            0x12865fc410015946, 0x17bf7252232774f6,
        ]),
    Fp::from_raw_unchecked([
            0x05e850fff8b9ae8b, 0x9055c16192ad2f0a,
            0xeaba94898076efd1, 0x6331bc94dde656cf,
            0xc7d4a97423b4f1c4, 0x0cd396679c9cc1c7,
        ]),
    Fp::from_raw_unchecked([
            0x26f5944ac7296496, 0xaf81d9e51c367dc5,
            0xd7ca1eb69d5fa67f, 0x6f13654dee8e098f,
            0xd8d09449f658d2dc, 0x1597b81a69af2750,
        ]),
    Fp::from_raw_unchecked([
            0xcf8a72b491bf5765, 0x8cc2f86285512a6f,
            0x262a893b62435aca, 0xc410199320c930d1,
            0x43230fd3dba86dbb, 0x09e9e8e1205ed83b,
        ]),
    Fp::from_raw_unchecked([
            0x32d4593e82675a14, 0x2fdface89eefa9d5,
            0x5f80ef25f6bba621, 0x1001bb0c0dc6aa87,
            0x86627aa067c0e02f, 0x09938a188462d2e0,
        ]),
];

pub(crate) static G1_ISO_Y_DEN: [Fp; 16] = [
    Fp::from_raw_unchecked([
            0xeb6c359d47e52b1c, 0x18ef5f8a10634d60,
            0xddfa71a0889d5b7e, 0x723e71dcc5fc1323,
            0x52f45700b70d5c69, 0x0a8b981ee47691f1,
        ]),
    Fp::from_raw_unchecked([
            0x616a3c4f5535b9fb, 0x6f5f037395dbd911,
            0xf25f4cc5e35c65da, 0x3e50dffea3c62658,
            0x6a33dca523560776, 0x0fadeff77b6bfe3e,
        ]),
    Fp::from_raw_unchecked([
            0x2be9b66df470059c, 0x24a2c159a3d36742,
            0x115dbe7ad10c2a37, 0xb6634a652ee5884d,
            0x04fe8bb2b8d81af4, 0x01c2a7a256fe9c41,
        ]),
    Fp::from_raw_unchecked([
            0xf27bf8ef3b75a386, 0x898b367476c9073f,
            0x24482e6b8c2f4e5f, 0xc8e0bbd6fe110806,
            0x59b0c17f7631448a, 0x11037cd58b3dbfbd,
        ]),
    Fp::from_raw_unchecked([
            0x31c7912ea267eec6, 0x1dbf6f1c5fcdb700,
            0xd30d4fe3ba86fdb1, 0x3cae528fbee9a2a4,
            0xb1cce69b6aa9ad9a, 0x044393bb632d94fb,
        ]),
    Fp::from_raw_unchecked([
            0xc66ef6efeeb5c7e8, 0x9824c289dd72bb55,
            0x71b1a4d2f119981d, 0x104fc1aafb0919cc,
            0x0e49df01d942a628, 0x096c3a09773272d4,
        ]),
    Fp::from_raw_unchecked([
            0x9abc11eb5fadeff4, 0x32dca50a885728f0,
            0xfb1fa3721569734c, 0xc4b76271ea6506b3,
            0xd466a75599ce728e, 0x0c81d4645f4cb6ed,
        ]),
    Fp::from_raw_unchecked([
            0x4199f10e5b8be45b, 0xda64e495b1e87930,
            0xcb353efe9b33e4ff, 0x9e9efb24aa6424c6,
            0xf08d33680a237465, 0x0d3378023e4c7406,
        ]),
    Fp::from_raw_unchecked([
            0x7eb4ae92ec74d3a5, 0xc341b4aa9fac3497,
            0x5be603899e907687, 0x03bfd9cca75cbdeb,
            0x564c2935a96bfa93, 0x0ef3c33371e2fdb5,
        ]),
    Fp::from_raw_unchecked([
            0x7ee91fd449f6ac2e, 0xe5d5bd5cb9357a30,
            0x773a8ca5196b1380, 0xd0fda172174ed023,
            0x6cb95e0fa776aead, 0x0d22d5a40cec7cff,
        ]),
    Fp::from_raw_unchecked([
            0xf727e09285fd8519, 0xdc9d55a83017897b,
            0x7549d8bd057894ae, 0x178419613d90d8f8,
            0xfce95ebdeb5b490a, 0x0467ffaef23fc49e,
        ]),
    Fp::from_raw_unchecked([
            0xc1769e6a7c385f1b, 0x79bc930deac01c03,
            0x5461c75a23ede3b5, 0x6e20829e5c230c45,
            0x828e0f1e772a53cd, 0x116aefa749127bff,
        ]),
    Fp::from_raw_unchecked([
            0x101c10bf2744c10a, 0xbbf18d053a6a3154,
            0xa0ecf39ef026f602, 0xfc009d4996dc5153,
            0xb9000209d5bd08d3, 0x189e5fe4470cd73c,
        ]),
    Fp::from_raw_unchecked([
            0x7ebd546ca1575ed2, 0xe47d5a981d081b55,
            0x57b2b625b6d4ca21, 0xb0a1ba04228520cc,
            0x98738983c2107ff3, 0x13dddbc4799d81d6,
        ]),
    Fp::from_raw_unchecked([
            0x09319f2e39834935, 0x039e952cbdb05c21,
            0x55ba77a9a2f76493, 0xfd04e3dfc6086467,
            0xfb95832e7d78742e, 0x0ef9c24eccaf5e0e,
        ]),
    Fp::from_raw_unchecked([
            0x760900000002fffd, 0xebf4000bc40c0002,
            0x5f48985753c758ba, 0x77ce585370525745,
            0x5c071a97a256ec6d, 0x15f65ec3fa80e493,
        ]),
];

pub(crate) static G2_ISO_X_NUM: [Fp2; 4] = [
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x31f5870aa0da772a, 0xd4ee4cf8fcc88bd9,
                0xcaaabb6231111a45, 0x12c8a972773af377,
                0x121ac615cf843e01, 0x047004ffe5b343d3,
            ]),
        c1: Fp::from_raw_unchecked([
                0x31f5870aa0da772a, 0xd4ee4cf8fcc88bd9,
                0xcaaabb6231111a45, 0x12c8a972773af377,
                0x121ac615cf843e01, 0x047004ffe5b343d3,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
        c1: Fp::from_raw_unchecked([
                0xf3f2904944246262, 0x6c74f9eb4f9e45cc,
                0xc17761990240403f, 0x7cfd7f15d1c974d7,
                0xefc2e08e2b7b689c, 0x142de553dea0ed54,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x4005b7db5ded797a, 0x687183090984dd19,
                0x867521d47590d604, 0x25f88bfa0aa05853,
                0xd33a376f2d8df889, 0x0fea1f404a2f6fef,
            ]),
        c1: Fp::from_raw_unchecked([
                0x79f94824a2123131, 0xb63a7cf5a7cf22e6,
                0xe0bbb0cc8120201f, 0x3e7ebf8ae8e4ba6b,
                0x77e1704715bdb44e, 0x0a16f2a9ef5076aa,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x6455a4a79d29113c, 0x632620408903bd17,
                0x8711e5ec883ee586, 0xa93ded95a978dfd1,
                0x08c975e7a4587184, 0x05a905970fc3efc3,
            ]),
        c1: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
    },
];

pub(crate) static G2_ISO_X_DEN: [Fp2; 3] = [
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
        c1: Fp::from_raw_unchecked([
                0x1f3affffff13ab97, 0xf25bfc611da3ff3e,
                0xca3757cb3819b208, 0x3e6427366f8cec18,
                0x03977bc86095b089, 0x04f69db13f39a952,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x447600000027552e, 0xdcb8009a43480020,
                0x6f7ee9ce4a6e8b59, 0xb10330b7c0a95bc6,
                0x6140b1fcfb1e54b7, 0x0381be097f0bb4e1,
            ]),
        c1: Fp::from_raw_unchecked([
                0x7588ffffffd8557d, 0x41f3ff646e0bffdf,
                0xf7b1e8d2ac426aca, 0xb3741acd32dbb6f8,
                0xe9daf5b9482d581f, 0x167f53e0ba7431b8,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x760900000002fffd, 0xebf4000bc40c0002,
                0x5f48985753c758ba, 0x77ce585370525745,
                0x5c071a97a256ec6d, 0x15f65ec3fa80e493,
            ]),
        c1: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
    },
];

pub(crate) static G2_ISO_Y_NUM: [Fp2; 4] = [
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x2326097b420332ed, 0x697b1b0a75ed2f1d,
                0x4ee649a1bf1aa326, 0x0cac2797f89d0dde,
                0x3b48c41795a7c12e, 0x11390c8c07ba10d7,
            ]),
        c1: Fp::from_raw_unchecked([
                0x2326097b420332ed, 0x697b1b0a75ed2f1d,
                0x4ee649a1bf1aa326, 0x0cac2797f89d0dde,
                0x3b48c41795a7c12e, 0x11390c8c07ba10d7,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
        c1: Fp::from_raw_unchecked([
                0xfaf48e38e36df6a5, 0xd13eaa2c25ddc701,
                0xc9add91297909b35, 0xc1fca909d66af9e9,
                0x4857f50370b81e50, 0x0d83fea82e76661b,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0xe205aaaaaaac8e37, 0xfcdc000768795556,
                0x0c96011a8a1537dd, 0x1c06a963f163406e,
                0x010df44c82a881e6, 0x174f45260f808feb,
            ]),
        c1: Fp::from_raw_unchecked([
                0xd7f9555555531c74, 0x21cffff748daaaa8,
                0x5a9ad1866c9bbe46, 0x4870a2210221d251,
                0x4a0db369c0a32af1, 0x02b1ccc429ff56af,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x158e425ed097b74f, 0x5dadc71c7e2c4bda,
                0x9d5d01ae2fc08e96, 0x482181f1982a7a90,
                0x2324e6d352d74573, 0x0884b37c10d55646,
            ]),
        c1: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
    },
];

pub(crate) static G2_ISO_Y_DEN: [Fp2; 4] = [
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x0162fffffa765adf, 0x8f7bea480083fb75,
                0x561b3c2259e93611, 0x11e19fc1a9c875d5,
                0xca713efc00367660, 0x03c6a03d41da1151,
            ]),
        c1: Fp::from_raw_unchecked([
                0x0162fffffa765adf, 0x8f7bea480083fb75,
                0x561b3c2259e93611, 0x11e19fc1a9c875d5,
                0xca713efc00367660, 0x03c6a03d41da1151,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
        c1: Fp::from_raw_unchecked([
                0x5db0fffffd3b02c5, 0xd713f52358ebfdba,
                0x5ea60761a84d161a, 0xbb2c75a34ea6c44a,
                0x0ac6735921c1119b, 0x0ee3d913bdacfbf6,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x66b10000003affc5, 0xcb1400e764ec0030,
                0xa73e5eb56fa5d106, 0x8984c913a0fe09a9,
                0x11e10afb78ad7f13, 0x05429d0e3e918f52,
            ]),
        c1: Fp::from_raw_unchecked([
                0x534dffffffc4aae6, 0x5397ff174c67ffcf,
                0xbff273eb870b251d, 0xdaf2827152870915,
                0x393a9cbaca9e2dc3, 0x14be74dbfaee5748,
            ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
                0x760900000002fffd, 0xebf4000bc40c0002,
                0x5f48985753c758ba, 0x77ce585370525745,
                0x5c071a97a256ec6d, 0x15f65ec3fa80e493,
            ]),
        c1: Fp::from_raw_unchecked([
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
                0x0000000000000000, 0x0000000000000000,
            ]),
    },
];

