//! # 分页参数

use crate::error::{Result, ServiceError};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// 校验后的分页参数
///
/// offset 在构造时用受检算术算好，保证恒 >= 0。
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    /// 当前页码（>= 1，1 为首页）
    pub page_no: i64,
    /// 每页条数（>= 1）
    pub page_size: i64,
    offset: i64,
}

impl PageParams {
    /// 根据可选参数创建分页配置，缺省取 `pageNo=1`、`pageSize=25`。
    ///
    /// 非正数不做修正，直接拒绝；`(pageNo - 1) * pageSize` 溢出
    /// 同样拒绝，避免回绕出负的 offset。
    pub fn new(page_no: Option<i64>, page_size: Option<i64>) -> Result<Self> {
        let page_no = page_no.unwrap_or(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page_no < 1 {
            return Err(ServiceError::invalid_pagination(format!(
                "pageNo 必须为正整数, 收到 {page_no}"
            )));
        }
        if page_size < 1 {
            return Err(ServiceError::invalid_pagination(format!(
                "pageSize 必须为正整数, 收到 {page_size}"
            )));
        }

        let offset = page_no
            .checked_sub(1)
            .and_then(|skipped_pages| skipped_pages.checked_mul(page_size))
            .ok_or_else(|| {
                ServiceError::invalid_pagination(format!(
                    "分页参数超出可计算范围: pageNo={page_no}, pageSize={page_size}"
                ))
            })?;

        Ok(Self {
            page_no,
            page_size,
            offset,
        })
    }

    /// 需要跳过的行数
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_apply_defaults() {
        let params = PageParams::new(None, None).expect("默认参数应有效");
        assert_eq!(params.page_no, 1);
        assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(params.offset(), 0, "第一页 offset 应为 0");
    }

    #[test]
    fn page_params_compute_offset() {
        let params = PageParams::new(Some(3), Some(10)).expect("参数应有效");
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn page_params_reject_non_positive_values() {
        assert!(PageParams::new(Some(0), None).is_err(), "pageNo=0 应被拒绝");
        assert!(PageParams::new(None, Some(0)).is_err(), "pageSize=0 应被拒绝");
        assert!(PageParams::new(Some(-1), Some(25)).is_err());
        assert!(PageParams::new(Some(1), Some(-5)).is_err());
    }

    #[test]
    fn rejection_is_invalid_pagination() {
        let err = PageParams::new(Some(-2), None).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ServiceError::InvalidPagination { .. }
        ));
    }

    #[test]
    fn page_params_reject_overflowing_offset() {
        // (i64::MAX - 1) * 25 回绕为负数，必须在构造时拒绝
        let err = PageParams::new(Some(i64::MAX), Some(25)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ServiceError::InvalidPagination { .. }
        ));

        let err = PageParams::new(Some(2), Some(i64::MAX)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ServiceError::InvalidPagination { .. }
        ));
    }

    #[test]
    fn page_params_accept_largest_page_without_overflow() {
        // 边界：pageSize=1 时 offset 最大可达 i64::MAX - 1
        let params = PageParams::new(Some(i64::MAX), Some(1)).expect("不溢出的组合应被接受");
        assert_eq!(params.offset(), i64::MAX - 1);
        assert!(params.offset() >= 0);
    }
}
