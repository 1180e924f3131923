// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for http-status-meaning.
//!
//! Two tables per language: localized category names (complete for every
//! language) and localized status meanings (partial). Lookup is a linear
//! scan, which is fine for tables of this size.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()`, `Lang::from_code()` and the name methods
//! 3. Create `XX_CATEGORIES` and `XX_MEANINGS` tables below
//! 4. Add `Lang::Xx` to `Lang::all()` and to the matches in `categories_for()`
//!    and `meanings_for()`

use crate::types::{StatusCategory, StatusCode};
use serde::{Deserialize, Serialize};

/// Languages with translation tables.
///
/// Each variant maps to an ISO 639-1 two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Es,
    Fr,
    De,
    Pt,
    It,
    Ru,
    Zh,
    Ja,
    Ar,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::Pt => "pt",
            Lang::It => "it",
            Lang::Ru => "ru",
            Lang::Zh => "zh",
            Lang::Ja => "ja",
            Lang::Ar => "ar",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "fr" => Some(Lang::Fr),
            "de" => Some(Lang::De),
            "pt" => Some(Lang::Pt),
            "it" => Some(Lang::It),
            "ru" => Some(Lang::Ru),
            "zh" => Some(Lang::Zh),
            "ja" => Some(Lang::Ja),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[
            Lang::En,
            Lang::Es,
            Lang::Fr,
            Lang::De,
            Lang::Pt,
            Lang::It,
            Lang::Ru,
            Lang::Zh,
            Lang::Ja,
            Lang::Ar,
        ]
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Spanish",
            Lang::Fr => "French",
            Lang::De => "German",
            Lang::Pt => "Portuguese",
            Lang::It => "Italian",
            Lang::Ru => "Russian",
            Lang::Zh => "Chinese",
            Lang::Ja => "Japanese",
            Lang::Ar => "Arabic",
        }
    }

    /// The language's name written in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
            Lang::Fr => "Français",
            Lang::De => "Deutsch",
            Lang::Pt => "Português",
            Lang::It => "Italiano",
            Lang::Ru => "Русский",
            Lang::Zh => "中文",
            Lang::Ja => "日本語",
            Lang::Ar => "العربية",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Resolve an optional language tag. Missing or unrecognised tags fall back
/// to English.
pub fn resolve_lang(tag: Option<&str>) -> Lang {
    tag.and_then(Lang::from_code).unwrap_or_default()
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Localized meaning for a code, if the language has one.
///
/// Always `None` for English: the canonical text lives in the status catalog.
pub fn translated_meaning(lang: Lang, code: StatusCode) -> Option<&'static str> {
    meanings_for(lang)
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|&(_, text)| text)
}

/// Localized category name, falling back to the English name.
pub fn category_name(lang: Lang, category: StatusCategory) -> &'static str {
    let key = category.name();
    categories_for(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |&(_, v)| v)
}

fn categories_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN_CATEGORIES,
        Lang::Es => ES_CATEGORIES,
        Lang::Fr => FR_CATEGORIES,
        Lang::De => DE_CATEGORIES,
        Lang::Pt => PT_CATEGORIES,
        Lang::It => IT_CATEGORIES,
        Lang::Ru => RU_CATEGORIES,
        Lang::Zh => ZH_CATEGORIES,
        Lang::Ja => JA_CATEGORIES,
        Lang::Ar => AR_CATEGORIES,
    }
}

fn meanings_for(lang: Lang) -> &'static [(StatusCode, &'static str)] {
    match lang {
        Lang::En => &[],
        Lang::Es => ES_MEANINGS,
        Lang::Fr => FR_MEANINGS,
        Lang::De => DE_MEANINGS,
        Lang::Pt => PT_MEANINGS,
        Lang::It => IT_MEANINGS,
        Lang::Ru => RU_MEANINGS,
        Lang::Zh => ZH_MEANINGS,
        Lang::Ja => JA_MEANINGS,
        Lang::Ar => AR_MEANINGS,
    }
}

// ─── Category names ─────────────────────────────────────────────────

const EN_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "Informational"),
    ("Success", "Success"),
    ("Redirection", "Redirection"),
    ("Client Error", "Client Error"),
    ("Server Error", "Server Error"),
    ("Unknown", "Unknown"),
];

const ES_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "Informativo"),
    ("Success", "Éxito"),
    ("Redirection", "Redirección"),
    ("Client Error", "Error del Cliente"),
    ("Server Error", "Error del Servidor"),
    ("Unknown", "Desconocido"),
];

const FR_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "Information"),
    ("Success", "Succès"),
    ("Redirection", "Redirection"),
    ("Client Error", "Erreur Client"),
    ("Server Error", "Erreur Serveur"),
    ("Unknown", "Inconnu"),
];

const DE_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "Information"),
    ("Success", "Erfolg"),
    ("Redirection", "Umleitung"),
    ("Client Error", "Client-Fehler"),
    ("Server Error", "Server-Fehler"),
    ("Unknown", "Unbekannt"),
];

const PT_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "Informativo"),
    ("Success", "Sucesso"),
    ("Redirection", "Redirecionamento"),
    ("Client Error", "Erro do Cliente"),
    ("Server Error", "Erro do Servidor"),
    ("Unknown", "Desconhecido"),
];

const IT_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "Informativo"),
    ("Success", "Successo"),
    ("Redirection", "Reindirizzamento"),
    ("Client Error", "Errore del Client"),
    ("Server Error", "Errore del Server"),
    ("Unknown", "Sconosciuto"),
];

const RU_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "Информационный"),
    ("Success", "Успех"),
    ("Redirection", "Перенаправление"),
    ("Client Error", "Ошибка Клиента"),
    ("Server Error", "Ошибка Сервера"),
    ("Unknown", "Неизвестно"),
];

const ZH_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "信息性"),
    ("Success", "成功"),
    ("Redirection", "重定向"),
    ("Client Error", "客户端错误"),
    ("Server Error", "服务器错误"),
    ("Unknown", "未知"),
];

const JA_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "情報"),
    ("Success", "成功"),
    ("Redirection", "リダイレクション"),
    ("Client Error", "クライアントエラー"),
    ("Server Error", "サーバーエラー"),
    ("Unknown", "不明"),
];

const AR_CATEGORIES: &[(&str, &str)] = &[
    ("Informational", "معلوماتي"),
    ("Success", "نجاح"),
    ("Redirection", "إعادة توجيه"),
    ("Client Error", "خطأ العميل"),
    ("Server Error", "خطأ الخادم"),
    ("Unknown", "غير معروف"),
];

// ─── Status meanings (English lives in the status catalog) ──────────

const ES_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "OK - La solicitud ha tenido éxito."),
    (201, "Creado - Se ha creado un nuevo recurso con éxito."),
    (400, "Solicitud incorrecta - El servidor no pudo entender la solicitud."),
    (401, "No autorizado - Se requiere autenticación."),
    (403, "Prohibido - El servidor entendió la solicitud, pero se niega a autorizarla."),
    (404, "No encontrado - El recurso solicitado no existe."),
    (500, "Error interno del servidor - Un mensaje de error genérico para problemas del servidor."),
    (503, "Servicio no disponible - El servidor no está disponible temporalmente."),
];

const FR_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "OK - La requête a réussi."),
    (201, "Créé - Une nouvelle ressource a été créée avec succès."),
    (400, "Mauvaise demande - Le serveur n'a pas pu comprendre la requête."),
    (401, "Non autorisé - Une authentification est nécessaire."),
    (403, "Interdit - Le serveur a compris la requête mais refuse de l'autoriser."),
    (404, "Non trouvé - La ressource demandée n'existe pas."),
    (500, "Erreur interne du serveur - Un message d'erreur générique pour les problèmes de serveur."),
    (503, "Service indisponible - Le serveur est temporairement indisponible."),
];

const DE_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "OK - Die Anfrage war erfolgreich."),
    (201, "Erstellt - Eine neue Ressource wurde erfolgreich erstellt."),
    (400, "Fehlerhafte Anfrage - Die Anfrage konnte nicht verstanden werden."),
    (401, "Nicht autorisiert - Authentifizierung ist erforderlich."),
    (403, "Verboten - Der Server hat die Anfrage verstanden, weigert sich aber, sie zu autorisieren."),
    (404, "Nicht gefunden - Die angeforderte Ressource existiert nicht."),
    (500, "Interner Serverfehler - Eine generische Fehlermeldung für Serverprobleme."),
    (503, "Dienst nicht verfügbar - Der Server ist vorübergehend nicht verfügbar."),
];

const PT_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "OK - A requisição foi bem-sucedida."),
    (201, "Criado - Um novo recurso foi criado com sucesso."),
    (400, "Requisição inválida - O servidor não conseguiu entender a requisição."),
    (401, "Não autorizado - Autenticação é necessária."),
    (403, "Proibido - O servidor entendeu a requisição, mas recusa-se a autorizá-la."),
    (404, "Não encontrado - O recurso solicitado não existe."),
    (500, "Erro interno do servidor - Uma mensagem de erro genérica para problemas no servidor."),
    (503, "Serviço indisponível - O servidor está temporariamente indisponível."),
];

const IT_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "OK - La richiesta è stata completata con successo."),
    (201, "Creato - Una nuova risorsa è stata creata con successo."),
    (400, "Richiesta errata - Il server non ha potuto comprendere la richiesta."),
    (401, "Non autorizzato - È richiesta l'autenticazione."),
    (403, "Vietato - Il server ha compreso la richiesta, ma si rifiuta di autorizzarla."),
    (404, "Non trovato - La risorsa richiesta non esiste."),
    (500, "Errore interno del server - Un messaggio di errore generico per problemi del server."),
    (503, "Servizio non disponibile - Il server è temporaneamente non disponibile."),
];

const RU_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "OK - Запрос успешно выполнен."),
    (201, "Создано - Новый ресурс был успешно создан."),
    (400, "Плохой запрос - Сервер не смог понять запрос."),
    (401, "Не авторизован - Требуется аутентификация."),
    (403, "Запрещено - Сервер понял запрос, но отказывается его авторизовать."),
    (404, "Не найдено - Запрашиваемый ресурс не существует."),
    (500, "Внутренняя ошибка сервера - Общее сообщение об ошибке для проблем сервера."),
    (503, "Сервис недоступен - Сервер временно недоступен."),
];

const ZH_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "成功 - 请求成功。"),
    (201, "已创建 - 成功创建了新资源。"),
    (400, "错误请求 - 服务器无法理解该请求。"),
    (401, "未授权 - 需要身份验证。"),
    (403, "禁止 - 服务器理解请求，但拒绝授权。"),
    (404, "未找到 - 请求的资源不存在。"),
    (500, "服务器内部错误 - 服务器问题的通用错误消息。"),
    (503, "服务不可用 - 服务器暂时不可用。"),
];

const JA_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "OK - リクエストは成功しました。"),
    (201, "作成済み - 新しいリソースが正常に作成されました。"),
    (400, "不正なリクエスト - サーバーはリクエストを理解できませんでした。"),
    (401, "未認証 - 認証が必要です。"),
    (403, "禁止 - サーバーはリクエストを理解しましたが、承認を拒否しています。"),
    (404, "見つかりません - 要求されたリソースは存在しません。"),
    (500, "サーバー内部エラー - サーバーの問題に関する一般的なエラーメッセージ。"),
    (503, "サービス利用不可 - サーバーは一時的に利用できません。"),
];

const AR_MEANINGS: &[(StatusCode, &str)] = &[
    (200, "موافق - نجح الطلب."),
    (201, "تم الإنشاء - تم إنشاء مورد جديد بنجاح."),
    (400, "طلب خاطئ - لم يستطع الخادم فهم الطلب."),
    (401, "غير مصرح - المصادقة مطلوبة."),
    (403, "محظور - فهم الخادم الطلب ولكنه يرفض تفويضه."),
    (404, "غير موجود - المورد المطلوب غير موجود."),
    (500, "خطأ داخلي في الخادم - رسالة خطأ عامة لمشاكل الخادم."),
    (503, "الخدمة غير متوفرة - الخادم غير متاح مؤقتًا."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn lang_codes_are_case_sensitive() {
        assert_eq!(Lang::from_code("FR"), None);
        assert_eq!(Lang::from_code("fr"), Some(Lang::Fr));
    }

    #[test]
    fn unknown_tag_resolves_to_english() {
        assert_eq!(resolve_lang(Some("xx")), Lang::En);
        assert_eq!(resolve_lang(None), Lang::En);
        assert_eq!(resolve_lang(Some("ja")), Lang::Ja);
    }

    #[test]
    fn every_language_names_every_category() {
        let unknown = [StatusCategory::Unknown];
        for lang in Lang::all() {
            assert_eq!(categories_for(*lang).len(), 6, "{:?} category table size", lang);
            for category in StatusCategory::all().iter().chain(unknown.iter()) {
                let key = category.name();
                assert!(
                    categories_for(*lang).iter().any(|(k, _)| *k == key),
                    "{:?} is missing a name for {}",
                    lang,
                    key
                );
            }
        }
    }

    #[test]
    fn category_names() {
        assert_eq!(category_name(Lang::De, StatusCategory::ClientError), "Client-Fehler");
        assert_eq!(category_name(Lang::Ja, StatusCategory::Unknown), "不明");
        assert_eq!(category_name(Lang::En, StatusCategory::ServerError), "Server Error");
    }

    #[test]
    fn meaning_tables_cover_the_same_codes() {
        let expected: Vec<StatusCode> = ES_MEANINGS.iter().map(|(c, _)| *c).collect();
        for lang in Lang::all().iter().filter(|l| **l != Lang::En) {
            let codes: Vec<StatusCode> = meanings_for(*lang).iter().map(|(c, _)| *c).collect();
            assert_eq!(codes, expected, "{:?} meaning table mismatch", lang);
        }
    }

    #[test]
    fn english_has_no_meaning_overrides() {
        assert_eq!(translated_meaning(Lang::En, 404), None);
        assert_eq!(
            translated_meaning(Lang::Fr, 404),
            Some("Non trouvé - La ressource demandée n'existe pas.")
        );
        assert_eq!(translated_meaning(Lang::Fr, 302), None);
    }
}
