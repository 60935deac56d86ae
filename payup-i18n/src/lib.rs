#[cfg(all(feature = "ko", feature = "en"))]
compile_error!("Cannot enable both 'ko' and 'en' features at the same time");

#[cfg(not(feature = "en"))]
pub mod strings {
    pub const APP_TITLE: &str = "🌿 더치페이 계산기 🌿";
    pub const RESULT_TITLE: &str = "정산 결과";
    pub const TOTAL_SPENT: &str = "총 지출";
    pub const PER_PERSON_SHARE: &str = "1인당 부담금";
    pub const CURRENCY_SUFFIX: &str = "원";
    pub const MEMBER: &str = "이름";
    pub const BALANCE: &str = "정산 전 수지";
    pub const FROM: &str = "보내는 사람";
    pub const TO: &str = "받는 사람";
    pub const AMOUNT: &str = "금액";
    pub const ALREADY_SETTLED: &str = "주고받을 금액이 없습니다.";
    pub const PROMPT_PEOPLE: &str = "참여 인원";
    pub const PROMPT_NAME: &str = "이름";
    pub const PROMPT_AMOUNT: &str = "금액";
    pub const SHEET_ARG_HELP: &str = "정산할 지출 시트 파일 (생략하면 대화형으로 입력)";
    pub const COPY_FLAG_HELP: &str = "표 없이 복사용 텍스트만 출력";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const APP_TITLE: &str = "🌿 Bill Splitter 🌿";
    pub const RESULT_TITLE: &str = "Settlement Result";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const PER_PERSON_SHARE: &str = "Per-person share";
    pub const CURRENCY_SUFFIX: &str = " KRW";
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const ALREADY_SETTLED: &str = "Everyone is already settled.";
    pub const PROMPT_PEOPLE: &str = "Participants";
    pub const PROMPT_NAME: &str = "Name";
    pub const PROMPT_AMOUNT: &str = "Amount";
    pub const SHEET_ARG_HELP: &str = "Expense sheet to settle (prompts interactively when omitted)";
    pub const COPY_FLAG_HELP: &str = "Print only the copyable text, without tables";
}

pub use strings::*;

/// Label for a participant whose name was left blank, `position` counting from 1.
#[cfg(not(feature = "en"))]
pub fn unnamed_participant(position: usize) -> String {
    format!("미입력자{position}")
}

#[cfg(feature = "en")]
pub fn unnamed_participant(position: usize) -> String {
    format!("Unnamed-{position}")
}

#[cfg(not(feature = "en"))]
pub fn participant_heading(position: usize) -> String {
    format!("참여자 {position}")
}

#[cfg(feature = "en")]
pub fn participant_heading(position: usize) -> String {
    format!("Participant {position}")
}

#[cfg(not(feature = "en"))]
pub fn exported_to(path: impl std::fmt::Display) -> String {
    format!("정산 결과를 {path}에 저장했습니다.")
}

#[cfg(feature = "en")]
pub fn exported_to(path: impl std::fmt::Display) -> String {
    format!("Saved the settlement to {path}.")
}
