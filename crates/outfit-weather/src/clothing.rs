//! Temperature based clothing advice.

use serde::{Deserialize, Serialize};

/// Clothing advice bucket for a forecast temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingAdvice {
    /// 28°C and above
    VeryLight,
    /// 23°C up to 28°C
    Light,
    /// 17°C up to 23°C
    LightLayers,
    /// 10°C up to 17°C
    Jacket,
    /// 5°C up to 10°C
    WarmCoat,
    /// Below 5°C
    Winter,
    /// Temperature missing or not a number
    NoData,
}

impl ClothingAdvice {
    /// Bucket for a temperature in °C; lower bounds are inclusive
    pub fn for_celsius(temp: f64) -> Self {
        if temp >= 28.0 {
            Self::VeryLight
        } else if temp >= 23.0 {
            Self::Light
        } else if temp >= 17.0 {
            Self::LightLayers
        } else if temp >= 10.0 {
            Self::Jacket
        } else if temp >= 5.0 {
            Self::WarmCoat
        } else {
            Self::Winter
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::VeryLight => "민소매, 반팔, 반바지, 원피스 등 매우 가벼운 옷차림을 추천해요. 🥵",
            Self::Light => "반팔, 얇은 셔츠, 반바지, 면바지로 시원하게 입으세요. 😄",
            Self::LightLayers => "얇은 니트, 가디건, 맨투맨, 청바지가 활동하기 좋은 날씨예요. 👍",
            Self::Jacket => "자켓, 트렌치코트, 니트, 청바지로 멋과 보온을 둘 다 챙기세요.🧥",
            Self::WarmCoat => "두꺼운 코트, 가죽 자켓, 플리스, 기모 옷차림이 필요해요. 🥶",
            Self::Winter => "패딩, 두꺼운 코트, 목도리, 장갑 등 방한용품으로 따뜻하게 입으세요. 🧤",
            Self::NoData => "온도 정보가 없어 추천할 수 없어요.",
        }
    }
}

impl std::fmt::Display for ClothingAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Advice for a raw forecast temperature value such as `"18"` or `"-3.5"`.
///
/// Missing or non-numeric input yields [`ClothingAdvice::NoData`].
pub fn recommend_clothing(temp: Option<&str>) -> ClothingAdvice {
    match temp.map(|t| t.trim().parse::<f64>()) {
        Some(Ok(celsius)) => ClothingAdvice::for_celsius(celsius),
        _ => ClothingAdvice::NoData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bounds_are_inclusive() {
        assert_eq!(ClothingAdvice::for_celsius(28.0), ClothingAdvice::VeryLight);
        assert_eq!(ClothingAdvice::for_celsius(23.0), ClothingAdvice::Light);
        assert_eq!(ClothingAdvice::for_celsius(17.0), ClothingAdvice::LightLayers);
        assert_eq!(ClothingAdvice::for_celsius(10.0), ClothingAdvice::Jacket);
        assert_eq!(ClothingAdvice::for_celsius(5.0), ClothingAdvice::WarmCoat);
        assert_eq!(ClothingAdvice::for_celsius(4.9), ClothingAdvice::Winter);
    }

    #[test]
    fn test_just_below_each_bound() {
        assert_eq!(ClothingAdvice::for_celsius(27.9), ClothingAdvice::Light);
        assert_eq!(ClothingAdvice::for_celsius(22.99), ClothingAdvice::LightLayers);
        assert_eq!(ClothingAdvice::for_celsius(16.5), ClothingAdvice::Jacket);
        assert_eq!(ClothingAdvice::for_celsius(9.9), ClothingAdvice::WarmCoat);
        assert_eq!(ClothingAdvice::for_celsius(-12.0), ClothingAdvice::Winter);
    }

    #[test]
    fn test_string_input() {
        assert_eq!(recommend_clothing(Some("31")), ClothingAdvice::VeryLight);
        assert_eq!(recommend_clothing(Some(" 18.5 ")), ClothingAdvice::LightLayers);
        assert_eq!(recommend_clothing(Some("-3")), ClothingAdvice::Winter);
    }

    #[test]
    fn test_unusable_input_falls_back() {
        assert_eq!(recommend_clothing(Some("abc")), ClothingAdvice::NoData);
        assert_eq!(recommend_clothing(Some("")), ClothingAdvice::NoData);
        assert_eq!(recommend_clothing(None), ClothingAdvice::NoData);
        assert_eq!(
            recommend_clothing(None).message(),
            "온도 정보가 없어 추천할 수 없어요."
        );
    }

    #[test]
    fn test_every_bucket_has_distinct_message() {
        let all = [
            ClothingAdvice::VeryLight,
            ClothingAdvice::Light,
            ClothingAdvice::LightLayers,
            ClothingAdvice::Jacket,
            ClothingAdvice::WarmCoat,
            ClothingAdvice::Winter,
            ClothingAdvice::NoData,
        ];
        let messages: std::collections::HashSet<_> = all.iter().map(|a| a.message()).collect();
        assert_eq!(messages.len(), all.len());
    }
}
