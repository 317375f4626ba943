//! 页面本地状态辅助
//!
//! 列表按 id 原地更新、行级 in-flight 标记、幂等插入。

use ocms_shared::Identified;
use std::collections::BTreeSet;

/// 正在请求中的行
///
/// 同一行的请求未完成前，再次点击被忽略；其他行不受影响。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight(BTreeSet<String>);

impl InFlight {
    /// 标记开始；该行已在请求中时返回 false
    pub fn begin(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    pub fn finish(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

/// 用新记录替换同 id 的旧记录，返回是否找到
pub fn replace_by_id<T: Identified>(list: &mut [T], item: T) -> bool {
    match list.iter_mut().find(|x| x.id() == item.id()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

pub fn remove_by_id<T: Identified>(list: &mut Vec<T>, id: &str) -> bool {
    let before = list.len();
    list.retain(|x| x.id() != id);
    list.len() != before
}

/// 幂等插入 (已选课 id 列表等)
pub fn insert_unique(ids: &mut Vec<String>, id: &str) -> bool {
    if ids.iter().any(|x| x == id) {
        false
    } else {
        ids.push(id.to_string());
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// 与相邻元素交换，越界时不动
pub fn move_item<T>(list: &mut [T], index: usize, direction: Direction) -> bool {
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1),
    };
    match target {
        Some(t) if index < list.len() && t < list.len() => {
            list.swap(index, t);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        published: bool,
    }

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, published: bool) -> Row {
        Row {
            id: id.into(),
            published,
        }
    }

    #[test]
    fn test_in_flight_ignores_second_click() {
        let mut f = InFlight::default();
        assert!(f.begin("c1"));
        assert!(!f.begin("c1"));
        // 其他行不受影响
        assert!(f.begin("c2"));
        f.finish("c1");
        assert!(!f.contains("c1"));
        assert!(f.contains("c2"));
    }

    #[test]
    fn test_replace_flips_only_target() {
        let mut list = vec![row("a", false), row("b", false)];
        assert!(replace_by_id(&mut list, row("b", true)));
        assert_eq!(list, vec![row("a", false), row("b", true)]);
        assert!(!replace_by_id(&mut list, row("z", true)));
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = vec![row("a", false), row("b", false)];
        assert!(remove_by_id(&mut list, "a"));
        assert!(!remove_by_id(&mut list, "a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_insert_unique_is_idempotent() {
        let mut ids = vec!["c1".to_string()];
        assert!(!insert_unique(&mut ids, "c1"));
        assert!(insert_unique(&mut ids, "c2"));
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[test]
    fn test_move_item_bounds() {
        let mut list = vec![1, 2, 3];
        assert!(!move_item(&mut list, 0, Direction::Up));
        assert!(!move_item(&mut list, 2, Direction::Down));
        assert!(move_item(&mut list, 1, Direction::Up));
        assert_eq!(list, vec![2, 1, 3]);
        assert!(move_item(&mut list, 1, Direction::Down));
        assert_eq!(list, vec![2, 3, 1]);
    }
}
