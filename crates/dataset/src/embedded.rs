//! The index universe shipped with the binary.

use core_types::Category::{self, Broad, Sector, Strategy, Thematic};

/// `(name, category, returns %, risk %)`, in display order.
pub(crate) const EMBEDDED_INDICES: &[(&str, Category, f64, f64)] = &[
    ("N50", Broad, 13.50, 12.90),
    ("NN50", Broad, 14.80, 15.70),
    ("N100", Broad, 13.60, 13.10),
    ("N200", Broad, 14.20, 13.40),
    ("NTOTLM", Broad, 14.60, 13.80),
    ("N500", Broad, 14.40, 13.70),
    ("NMC5025", Broad, 15.60, 15.10),
    ("N500EQ", Broad, 15.70, 17.90),
    ("NMC150", Broad, 18.30, 16.40),
    ("NMC50", Broad, 18.90, 18.00),
    ("NMIDSEL", Broad, 17.60, 17.80),
    ("NMC100", Broad, 17.40, 17.20),
    ("NSC250", Broad, 16.60, 19.90),
    ("NSC50", Broad, 14.40, 22.60),
    ("NSC100", Broad, 15.50, 21.40),
    ("NMICRO", Broad, 21.40, 22.60),
    ("NLMC250", Broad, 16.00, 14.40),
    ("NMSC400", Broad, 17.70, 17.40),
    ("NQUANT", Thematic, 8.60, 11.00),
    ("NELSS", Thematic, 15.90, 13.80),
    ("NSILVER", Thematic, 9.10, 12.80),
    ("NBCYCLE", Thematic, 6.40, 3.30),
    ("NCONTRA", Strategy, 15.70, 13.40),
    ("NGOLD", Thematic, 14.40, 11.00),
    ("NFLEXI", Strategy, 12.50, 13.70),
    ("NINNOV", Thematic, 6.80, 8.40),
    ("NAUTO", Sector, 14.80, 18.80),
    ("NBANK", Sector, 14.10, 17.80),
    ("NCHEM", Sector, 20.40, 15.50),
    ("NFINSERV", Sector, 15.50, 16.70),
    ("NFINS25", Sector, 16.40, 17.20),
    ("NFINSEXB", Sector, 17.40, 19.40),
    ("NFMCG", Sector, 12.40, 12.60),
    ("NHEALTH", Sector, 9.00, 14.70),
    ("NTECH", Sector, 14.80, 17.50),
    ("NMEDIA", Sector, -1.30, 23.40),
    ("NMETAL", Sector, 22.60, 24.20),
    ("NPHARMA", Sector, 7.20, 16.10),
    ("NPVTBANK", Sector, 12.90, 17.80),
    ("NPSUBANK", Sector, 14.70, 29.60),
    ("NREALTY", Sector, 20.80, 27.40),
    ("NCONDUR", Sector, 18.10, 17.70),
    ("NOILGAS", Sector, 18.10, 18.60),
    ("NMSFINS", Sector, 15.70, 22.10),
    ("NMSHC", Sector, 17.10, 14.40),
    ("NMSITT", Sector, 20.40, 21.30),
    ("N100EQWT", Strategy, 14.20, 14.60),
    ("N100LV30", Strategy, 14.10, 11.00),
    ("N5ARB", Strategy, 6.40, 3.30),
    ("N200M30", Strategy, 17.70, 15.40),
    ("N200AL30", Strategy, 19.60, 16.80),
    ("N100AL30", Strategy, 16.50, 16.00),
    ("NAL50", Strategy, 19.70, 19.30),
    ("NALV30", Strategy, 14.70, 12.30),
    ("NAQLV30", Strategy, 16.10, 11.70),
    ("NAQVLV30", Strategy, 16.30, 11.60),
    ("NDIVOP50", Strategy, 15.00, 12.50),
    ("NGROW15", Strategy, 10.40, 13.30),
    ("NHBETA50", Strategy, 13.50, 24.60),
    ("NLV50", Strategy, 14.20, 11.20),
    ("NT10EQWT", Strategy, 14.60, 13.40),
    ("NT15EW", Strategy, 14.10, 13.90),
    ("NT20EW", Strategy, 14.30, 13.60),
    ("N100QLT30", Strategy, 12.00, 12.10),
    ("NM150M50", Strategy, 21.10, 16.90),
    ("N5FCQ3", Strategy, 16.90, 14.70),
    ("N5LV5", Strategy, 15.40, 10.90),
    ("N500M50", Strategy, 19.00, 17.30),
    ("N500QLT50", Strategy, 14.00, 13.40),
    ("NMQLV", Strategy, 16.50, 13.20),
    ("NMC150Q", Strategy, 15.10, 14.20),
    ("NSC250Q", Strategy, 18.00, 18.00),
    ("N5MCMQ5", Strategy, 17.70, 15.50),
    ("NMSCMQ", Strategy, 18.10, 16.50),
    ("NSC250MQ", Strategy, 18.50, 19.40),
    ("NQLV30", Strategy, 11.70, 11.20),
    ("N50EQWGT", Strategy, 14.30, 13.90),
    ("N50V20", Strategy, 15.50, 12.20),
    ("N200V30", Strategy, 18.90, 19.80),
    ("N500V50", Strategy, 19.00, 21.00),
    ("N500EQWT", Strategy, 15.70, 18.00),
    ("N200Q30", Strategy, 13.10, 11.70),
    ("NBIRLA", Thematic, 12.40, 20.00),
    ("NCM", Thematic, 18.40, 20.60),
    ("NCOMM", Thematic, 16.80, 16.70),
    ("NCHOUS", Thematic, 14.20, 17.10),
    ("NCPSE", Thematic, 16.50, 18.60),
    ("NENERGY", Thematic, 18.70, 17.90),
    ("NEVNAA", Thematic, 13.20, 16.90),
    ("NHOUSING", Thematic, 15.90, 16.10),
    ("N100ESG", Thematic, 14.30, 13.20),
    ("N100ESGE", Thematic, 14.30, 13.20),
    ("N100ESGSL", Thematic, 13.40, 12.40),
    ("NICON", Thematic, 14.40, 12.90),
    ("NIDEF", Sector, 24.70, 24.70),
    ("NIDIGI", Thematic, 12.80, 17.00),
    ("NIFSL", Sector, 16.80, 17.80),
    ("NIINT", Sector, 4.60, 12.80),
    ("NIMFG", Sector, 14.80, 15.00),
    ("NTOUR", Sector, 17.10, 21.40),
    ("NINFRA", Thematic, 14.30, 15.30),
    ("NMAHIN", Thematic, 17.30, 19.50),
    ("NIPO", Thematic, 9.20, 16.40),
    ("NMIDLIQ15", Strategy, 19.70, 18.50),
    ("NMSICON", Thematic, 17.20, 16.10),
    ("NMNC", Broad, 13.60, 12.60),
    ("NMOBIL", Thematic, 16.90, 17.50),
    ("NPSE", Thematic, 16.50, 18.50),
    ("NREiT", Thematic, 7.90, 8.10),
    ("NRRL", Thematic, 13.80, 14.50),
    ("NNCCON", Sector, 14.90, 13.00),
    ("NSERVSEC", Sector, 13.70, 14.20),
    ("NSH25", Strategy, 11.30, 11.90),
    ("NTATA", Thematic, 15.20, 14.90),
    ("NTATA25C", Thematic, 17.30, 17.50),
    ("NTRANS", Sector, 15.90, 17.90),
    ("NLCLIQ15", Strategy, 11.30, 18.10),
    ("N50SH", Strategy, 11.70, 12.60),
    ("N500SH", Strategy, 13.90, 12.80),
    ("NMFG532", Sector, 15.20, 15.70),
    ("NINFRA532", Thematic, 16.80, 16.20),
    ("NSMEE", Thematic, 29.30, 19.10),
    ("NRPSU", Thematic, 15.00, 17.20),
    ("NMAATR", Thematic, 19.50, 18.00),
    ("NNACON", Sector, 14.80, 18.10),
    ("NWVS", Thematic, 2.00, 23.60),
];
