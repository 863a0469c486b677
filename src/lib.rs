pub mod core;
pub mod analysis;
pub mod index;
pub mod search;
pub mod source;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                       LITTLESEARCH STRUCT ARCHITECTURE                        │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE LAYER ──────────────────────────────────┐
│                                                                              │
│  ┌────────────────────────────────────────────────────────────────────┐     │
│  │                        struct SearchEngine                          │     │
│  │ config: Config                 // paths + max_results               │     │
│  │ normalizer: Normalizer         // token -> keyword                  │     │
│  │ index: KeywordIndex            // keyword -> ranked occurrences     │     │
│  │ executor: QueryExecutor        // two-keyword OR queries            │     │
│  │ stats: IndexStats              // build metrics                     │     │
│  └────────────────────────────────────────────────────────────────────┘     │
│                                                                              │
│  ┌──────────────────┐  ┌───────────────────────┐  ┌─────────────────────┐   │
│  │ struct DocumentId│  │ struct Occurrence     │  │ struct Config       │   │
│  │ • 0: String      │  │ • document: DocumentId│  │ • manifest_path     │   │
│  └──────────────────┘  │ • frequency: u32      │  │ • noise_words_path  │   │
│                        └───────────────────────┘  │ • document_root     │   │
│                                                   │ • max_results       │   │
│                                                   └─────────────────────┘   │
└──────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── ANALYSIS LAYER ────────────────────────────────┐
│  WhitespaceTokenizer ──► Normalizer { noise_words: NoiseWords }              │
│                           1. strip trailing . , ? : ; !                      │
│                           2. letters only                                    │
│                           3. lower-case                                      │
│                           4. drop noise words                                │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── INDEX LAYER ─────────────────────────────────┐
│  DocumentLoader ──► FrequencyTable { keyword -> Occurrence }                 │
│                            │                                                 │
│                            ▼                                                 │
│  KeywordIndex { keywords: HashMap<String, OccurrenceList>, doc_count }       │
│     OccurrenceList: Vec<Occurrence>, descending frequency,                   │
│     new entries placed by insert_last_occurrence (binary search)             │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── SEARCH LAYER ────────────────────────────────┐
│  QueryExecutor::execute(kw1, kw2) ──► merge_ranked(list1, list2, limit)      │
│     two cursors, kw1 wins ties, dedup, at most max_results documents         │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── SOURCE LAYER ────────────────────────────────┐
│  read_manifest(path)     -> Vec<DocumentId>                                  │
│  read_noise_words(path)  -> NoiseWords                                       │
│  trait DocumentSource    { tokens(&DocumentId) -> Result<Vec<String>> }      │
│     FileDocumentSource { root }   MemoryDocumentSource { documents }         │
└──────────────────────────────────────────────────────────────────────────────┘
*/
