// src/config/consts.rs

// Net config
pub const URL_TEMPLATE: &str =
    "https://www.einforma.pt/servlet/app/portal/ENTP/prod/ETIQUETA_EMPRESA/nif/{nif}/source/search/campaign/fichaemp/";
pub const NIF_PLACEHOLDER: &str = "{nif}";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Throttle
pub const REQUEST_PAUSE_MS: u64 = 2_000; // be polite, keeps the anti-scraping wall quiet

// Page labels
pub const LABEL_NAME: &str = "Denominação:";
pub const LABEL_CAE: &str = "Atividade (CAE):";

// Table
pub const COL_NIF: &str = "NIF";
pub const COL_NAME: &str = "Nome_Empresa";
pub const COL_CAE: &str = "CAE";

// Fallback markers
pub const NAME_NOT_FOUND: &str = "Nome não encontrado";
pub const CAE_NOT_FOUND: &str = "CAE não encontrado";
pub const NOT_FOUND: &str = "Não encontrado";
