//! Shared fixtures for the integration tests.

/// A small but complete GenBank record: circular plasmid header, two
/// references, a source feature, a gene/CDS pair, a remote feature that
/// must be excluded, and a 120 bp origin.
pub const SAMPLE_RECORD: &str = "\
LOCUS       NC_TEST              120 bp    DNA     circular BCT 01-JAN-2024
DEFINITION  Synthetic test plasmid pTEST, complete sequence.
ACCESSION   NC_TEST
VERSION     NC_TEST.1
KEYWORDS    .
SOURCE      Escherichia coli
  ORGANISM  Escherichia coli
            Bacteria; Pseudomonadota; Gammaproteobacteria.
REFERENCE   1  (bases 1 to 120)
  AUTHORS   Doe,J. and Roe,R.
  TITLE     Complete sequence of a synthetic test plasmid
  JOURNAL   J. Test. Biol. 1 (1), 1-5 (2024)
   PUBMED   123456
REFERENCE   2  (bases 1 to 120)
  AUTHORS   Doe,J.
  TITLE     Direct Submission
  JOURNAL   Submitted (01-JAN-2024) Test Institute
FEATURES             Location/Qualifiers
     source          1..120
                     /organism=\"Escherichia coli\"
                     /mol_type=\"genomic DNA\"
                     /strain=\"K-12\"
     gene            complement(5..40)
                     /gene=\"testA\"
                     /locus_tag=\"T001\"
     CDS             join(5..20,25..40)
                     /gene=\"testA\"
                     /codon_start=1
                     /product=\"test protein
                     alpha subunit\"
                     /translation=\"MKVLAGGSTRMKVLAGGSTR\"
                     /pseudo
     misc_feature    NC_OTHER:1..10
                     /note=\"remote reference\"
ORIGIN
        1 acgtacgtac gtacgtacgt acgtacgtac gtacgtacgt acgtacgtac gtacgtacgt
       61 acgtacgtac gtacgtacgt acgtacgtac gtacgtacgt acgtacgtac gtacgtacgt
//
";
