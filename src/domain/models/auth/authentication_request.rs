/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (토큰이 있으면 검증, 없어도 허용)
    Optional,
}

impl AuthMode {
    /// 라우트 보호 설정값에서 모드를 결정합니다.
    pub fn from_protection(protected: bool) -> Self {
        if protected {
            AuthMode::Required
        } else {
            AuthMode::Optional
        }
    }
}
