//! Built-in stopwords used when no stopword list has been saved yet.
//!
//! Latin function words after the Perseus list, extended with enclitics,
//! V-spellings and a few corpus artifacts.

pub const SEED_STOPWORDS: &[&str] = &[
    "a", "ab", "ac", "ad", "adhic", "aliqui", "aliquae", "aliquod", "alicuius", "alicui", "aliquo",
    "aliqua", "aliquorum", "aliquarum", "aliquibus", "aliquos", "aliquas", "aliquis", "aliquid",
    "an", "ante", "apud", "at", "atque", "aut", "autem", "cuius", "cui", "cum", "cur", "de",
    "deinde", "dum", "ego", "enim", "eram", "eras", "erat", "eramus", "eratis", "erant", "ergo",
    "ero", "eris", "erit", "erimus", "eritis", "erunt", "es", "esse", "esset", "essent", "est",
    "estis", "et", "etiam", "etsi", "ex", "e", "fio", "fis", "fit", "fimus", "fitis", "fiunt",
    "fui", "fuisti", "fuit", "fuimus", "fuistis", "fuerunt", "haud", "hinc", "hic", "haec", "hoc",
    "huius", "huic", "hunc", "hanc", "hac", "hi", "hae", "horum", "harum", "his", "hos", "has",
    "huc", "iam", "idem", "igitur", "ille", "illa", "illud", "illius", "illi", "illum", "illam",
    "illo", "illae", "illorum", "illarum", "illis", "illos", "illas", "in", "infra", "inter",
    "interim", "inde", "itaque", "ipse", "ipsa", "ipsum", "ipsius", "ipsi", "ipsam", "ipso",
    "ipsae", "ipsorum", "ipsarum", "ipsis", "ipsos", "ipsas", "is", "ea", "id", "eius", "ei",
    "eum", "eam", "eo", "ii", "eae", "eorum", "earum", "iis", "eos", "eas", "ita", "m", "magis",
    "mihi", "me", "meus", "mea", "meum", "mi", "mei", "meo", "meae", "meam", "meorum", "mearum",
    "meis", "meos", "meas", "modo", "mox", "nam", "ne", "nec", "necque", "neque", "nisi", "non",
    "nos", "nostrum", "nihil", "nostri", "nobis", "nullus", "nulla", "nullum", "nullius", "nulli",
    "nullo", "nullae", "nullam", "nullibus", "nullos", "nullas", "nunc", "o", "ob", "per",
    "possum", "post", "pro", "quae", "quam", "quare", "qui", "quod", "quem", "quos", "quas", "quo",
    "qua", "quorum", "quarum", "quia", "quibus", "quicumque", "quidem", "quidquid", "quilibet",
    "quis", "quid", "quisnam", "quisquam", "quisque", "quisquis", "quoniam", "quoque", "quot",
    "quotiens", "se", "sed", "si", "sic", "sine", "sit", "sint", "sis", "simus", "sive", "sub",
    "sui", "sum", "sumus", "sunt", "super", "suus", "sua", "suum", "suo", "suam", "talis", "tale",
    "talia", "tam", "tamen", "te", "tibi", "trans", "tu", "tum", "tuus", "tua", "tuum", "tuo",
    "tuae", "tuam", "tui", "tuorum", "tuarum", "tuis", "tuos", "tuas", "ubi", "uel", "vel", "uero",
    "vero", "unus", "una", "unum", "unius", "uni", "unam", "uno", "ut", "-que", "-ve", "-ne", "vt",
    "causa", "imprimis", "velut", "quasi", "contra", "quin", "econtra", "praeter", "gratum",
    "grata", "à", "sat", "Google", "ceu", "amp", "-ue", "vbi", "copia", "res", "rem", "re",
    "rerum", "rei", "rebus", "unde", "vnde", "quidam", "quaedam", "quoddam", "cuiusdam", "cuidam",
    "quendam", "quandam", "quodam", "quadam", "cujusdam", "quiddam", "quorundam", "quorandam",
    "quosdam", "quasdam", "quibusdam", "esses", "quamvis", "quamuis", "tantum", "tanta", "tanto",
    "tanti", "tantae", "tantos", "tantas", "tantis", "tante", "omnis", "omni", "omne", "omnem",
    "omnium", "omnibus", "omnia", "omnes", "è", "paene", "seu", "ideo", "utpote", "vtpote", "tot",
    "semel", "vix", "satis", "inquit", "sibi", "donec", "sese", "vni", "nostro", "noster", "suae",
    "suis", "suorum", "suarum", "suos", "suas",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::SEED_STOPWORDS;

    #[test]
    fn seed_list_has_no_duplicates_or_blanks() {
        let unique: HashSet<&str> = SEED_STOPWORDS.iter().copied().collect();
        assert_eq!(unique.len(), SEED_STOPWORDS.len());
        assert!(SEED_STOPWORDS.iter().all(|w| !w.trim().is_empty()));
        assert!(unique.contains("atque"));
        assert!(unique.contains("-que"));
    }
}
